//! 음료 엔티티
//!
//! 음료는 제목과 레시피(재료 목록)로 구성됩니다.
//! 공개 API에는 재료 이름을 숨긴 [`Drink::short`] 표현을,
//! `get:drinks-detail` 권한이 있는 바리스타/매니저에게는 [`Drink::long`] 표현을 제공합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 레시피를 구성하는 재료 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    /// 재료 이름 (예: "espresso")
    #[validate(length(min = 1, message = "재료 이름은 비어 있을 수 없습니다"))]
    pub name: String,

    /// 컵 그림에 쓰이는 색상 (예: "#ababab", "blue")
    #[validate(length(min = 1, message = "재료 색상은 비어 있을 수 없습니다"))]
    pub color: String,

    /// 비율 단위
    #[validate(range(min = 1, message = "재료 비율은 1 이상이어야 합니다"))]
    pub parts: u32,
}

/// 저장된 음료
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// 아직 ID가 할당되지 않은 새 음료
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// 공개 레시피 항목 (재료 이름 제외)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// 공개 음료 표현
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDrink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

/// 상세 음료 표현
pub type LongDrink = Drink;

impl Drink {
    pub fn from_new(id: i64, new_drink: NewDrink) -> Self {
        Self {
            id,
            title: new_drink.title,
            recipe: new_drink.recipe,
        }
    }

    /// 재료 이름을 숨긴 공개 표현
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|ingredient| ShortIngredient {
                    color: ingredient.color.clone(),
                    parts: ingredient.parts,
                })
                .collect(),
        }
    }

    /// 재료 이름을 포함한 상세 표현
    pub fn long(&self) -> LongDrink {
        self.clone()
    }
}

impl NewDrink {
    /// 데이터 초기화 시 들어가는 기본 음료
    pub fn water() -> Self {
        Self {
            title: "water".to_string(),
            recipe: vec![Ingredient {
                name: "water".to_string(),
                color: "blue".to_string(),
                parts: 1,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> Drink {
        Drink {
            id: 3,
            title: "latte".to_string(),
            recipe: vec![
                Ingredient {
                    name: "espresso".to_string(),
                    color: "#3f1f00".to_string(),
                    parts: 1,
                },
                Ingredient {
                    name: "milk".to_string(),
                    color: "#f5f5f5".to_string(),
                    parts: 3,
                },
            ],
        }
    }

    #[test]
    fn test_short_hides_ingredient_names() {
        let json = serde_json::to_value(latte().short()).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "latte");
        assert_eq!(json["recipe"][1]["color"], "#f5f5f5");
        assert_eq!(json["recipe"][1]["parts"], 3);
        assert!(json["recipe"][0].get("name").is_none());
    }

    #[test]
    fn test_long_keeps_everything() {
        let json = serde_json::to_value(latte().long()).unwrap();

        assert_eq!(json["recipe"][0]["name"], "espresso");
        assert_eq!(json["recipe"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_ingredient_validation() {
        let valid = Ingredient {
            name: "milk".to_string(),
            color: "white".to_string(),
            parts: 2,
        };
        assert!(valid.validate().is_ok());

        let zero_parts = Ingredient { parts: 0, ..valid.clone() };
        assert!(zero_parts.validate().is_err());

        let no_name = Ingredient { name: String::new(), ..valid };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_seed_drink() {
        let water = Drink::from_new(1, NewDrink::water());

        assert_eq!(water.title, "water");
        assert_eq!(water.recipe.len(), 1);
        assert_eq!(water.recipe[0].color, "blue");
    }
}
