use serde::{Deserialize, Serialize};

/// A day's menu for one meal slot, as served by `GET /menus/?meal_date=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub meal_type: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
}

impl Menu {
    /// Name of the headline dish, used on the meal cards.
    pub fn headline_dish(&self) -> &str {
        self.items
            .first()
            .map(|item| item.name.as_str())
            .unwrap_or("Not Available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_dish_falls_back_when_empty() {
        let menu = Menu {
            id: 1,
            meal_type: "Lunch".to_string(),
            items: vec![],
        };
        assert_eq!(menu.headline_dish(), "Not Available");
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{"id": 7, "meal_type": "Breakfast", "items": [{"name": "Poha"}, {"name": "Chai"}]}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.id, 7);
        assert_eq!(menu.headline_dish(), "Poha");
    }
}
