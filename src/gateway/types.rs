//! Wire shapes of the customer and item services.

use serde::{Deserialize, Serialize};

/// Stand-in for the password in debug output.
pub const PASSWORD_MASK: &str = "••••••••";

/// Body of `POST /rest/customerservice/addjsoncustomer`.
///
/// Every field goes over the wire as a string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

impl std::fmt::Debug for NewCustomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewCustomer")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("user_name", &self.user_name)
            .field("password", &PASSWORD_MASK)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("image", &self.image)
            .finish()
    }
}

/// Body of `POST /rest/itemservice/addjsonitem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub category_id: i64,
    pub customer_id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub condition: String,
    pub location: String,
}

/// Body of `PUT /rest/itemservice/updatejsonitem`.
///
/// There is no edit form behind this operation; the body is always
/// [`ItemUpdate::fixed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub item_id: i64,
    pub category_id: i64,
    pub customer_id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub condition: String,
    pub location: String,
}

impl ItemUpdate {
    pub fn fixed() -> Self {
        Self {
            item_id: 1,
            category_id: 1,
            customer_id: 1,
            title: "new title".to_string(),
            price: 1.0,
            description: "new description".to_string(),
            condition: "used".to_string(),
            location: "new location".to_string(),
        }
    }
}

/// Body of `DELETE /rest/itemservice/deletejsonitem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub item_id: i64,
}

/// An item as listed by `GET /rest/itemservice/getall`.
///
/// The server owns the shape; anything missing decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub item_id: Option<i64>,
    pub category_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub condition: Option<String>,
    pub location: Option<String>,
}

impl Item {
    /// One-line summary for list views.
    pub fn summary(&self) -> String {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        let mut line = match self.item_id {
            Some(id) => format!("#{} {}", id, title),
            None => title.to_string(),
        };
        if let Some(price) = self.price {
            line.push_str(&format!(" · {:.2} €", price));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            line.push_str(&format!(" · {}", location));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_customer_uses_camel_case_keys() {
        let customer = NewCustomer {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            user_name: "ada".into(),
            password: "s3cret".into(),
            date_of_birth: "1815-12-10".into(),
            email: "ada@example.com".into(),
            phone: "+44123".into(),
            image: "ada.png".into(),
        };
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            value,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "userName": "ada",
                "password": "s3cret",
                "dateOfBirth": "1815-12-10",
                "email": "ada@example.com",
                "phone": "+44123",
                "image": "ada.png",
            })
        );
    }

    #[test]
    fn new_customer_debug_masks_password() {
        let customer = NewCustomer {
            first_name: String::new(),
            last_name: String::new(),
            user_name: String::new(),
            password: "hunter2".into(),
            date_of_birth: String::new(),
            email: String::new(),
            phone: String::new(),
            image: String::new(),
        };
        assert!(!format!("{:?}", customer).contains("hunter2"));
    }

    #[test]
    fn fixed_update_payload() {
        let value = serde_json::to_value(ItemUpdate::fixed()).unwrap();
        assert_eq!(
            value,
            json!({
                "itemId": 1,
                "categoryId": 1,
                "customerId": 1,
                "title": "new title",
                "price": 1.0,
                "description": "new description",
                "condition": "used",
                "location": "new location",
            })
        );
    }

    #[test]
    fn item_decodes_partial_objects() {
        let items: Vec<Item> = serde_json::from_value(json!([
            { "itemId": 3, "title": "Bike", "price": 120.5, "location": "Espoo" },
            { "title": "Lamp" },
            {}
        ]))
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].summary(), "#3 Bike · 120.50 € · Espoo");
        assert_eq!(items[1].summary(), "Lamp");
        assert_eq!(items[2].summary(), "(untitled)");
    }
}
