mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{free_port, gateway_for};
use serde_json::json;
use shopfront::gateway::{GatewayError, NewCustomer, NewItem, Operation, RemoteGateway};

fn customer() -> NewCustomer {
    NewCustomer {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        user_name: "ada".into(),
        password: "analytical".into(),
        date_of_birth: "1815-12-10".into(),
        email: "ada@example.com".into(),
        phone: "0401234567".into(),
        image: "ada.png".into(),
    }
}

#[tokio::test]
async fn create_customer_posts_camel_case_json() {
    let backend = MockBackend::start().await;
    let gateway = gateway_for(&backend.base_url());

    gateway.create_customer(&customer()).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/rest/customerservice/addjsoncustomer");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.json(),
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "userName": "ada",
            "password": "analytical",
            "dateOfBirth": "1815-12-10",
            "email": "ada@example.com",
            "phone": "0401234567",
            "image": "ada.png",
        })
    );
}

#[tokio::test]
async fn list_items_decodes_partial_records() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"itemId": 3, "title": "Bike", "price": 120.5, "location": "Espoo"}, {"title": "Lamp"}]"#,
        ))
        .await;
    let gateway = gateway_for(&backend.base_url());

    let items = gateway.list_items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_id, Some(3));
    assert_eq!(items[1].title.as_deref(), Some("Lamp"));
    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/rest/itemservice/getall");
}

#[tokio::test]
async fn non_json_response_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::text(200, "<html>oops</html>"))
        .await;
    let gateway = gateway_for(&backend.base_url());

    let err = gateway.list_items().await.unwrap_err();

    assert!(matches!(
        err,
        GatewayError::Decode {
            operation: Operation::ListItems,
            ..
        }
    ));
}

#[tokio::test]
async fn error_status_with_json_body_is_not_interpreted() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"error": "duplicate"}"#).with_status(500))
        .await;
    let gateway = gateway_for(&backend.base_url());

    let response = gateway.create_customer(&customer()).await.unwrap();
    assert_eq!(response["error"], "duplicate");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let gateway = gateway_for(&format!("http://127.0.0.1:{}", free_port()));

    let err = gateway.delete_item(4).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.operation(), Some(Operation::DeleteItem));
}

#[tokio::test]
async fn item_mutations_use_their_own_routes() {
    let backend = MockBackend::start().await;
    let gateway = gateway_for(&backend.base_url());

    let item = NewItem {
        category_id: 2,
        customer_id: 9,
        title: "Bike".into(),
        price: 120.5,
        description: "Red".into(),
        image: "bike.png".into(),
        condition: "used".into(),
        location: "Espoo".into(),
    };
    gateway.create_item(&item).await.unwrap();
    gateway.update_item().await.unwrap();
    gateway.delete_item(4).await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/rest/itemservice/addjsonitem");
    assert_eq!(requests[0].json()["categoryId"], 2);
    assert_eq!(requests[0].json()["price"], 120.5);

    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/rest/itemservice/updatejsonitem");
    assert_eq!(
        requests[1].json(),
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

    assert_eq!(requests[2].method, "DELETE");
    assert_eq!(requests[2].path, "/rest/itemservice/deletejsonitem");
    assert_eq!(requests[2].json(), json!({ "itemId": 4 }));
}
