#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::{Role, Session, SessionStore};
use serde_json::json;

fn signed_in_store() -> SessionStore {
    let store = SessionStore::in_memory();
    store
        .save(&Session {
            token: "jwt-token".into(),
            seller_id: "s1".into(),
            seller_name: "Ana".into(),
            role: Role::Admin,
        })
        .unwrap();
    store
}

fn seller_json(id: &str, name: &str, cpf: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "cpf": cpf,
        "email": format!("{}@example.com", id),
        "phone": null,
        "active": true,
        "role": "SELLER"
    })
}

#[tokio::test]
async fn login_stores_session_and_digits_only_cpf() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/login");
        then.status(200).json_body(json!({
            "token": "jwt-token",
            "sellerId": "s1",
            "name": "Ana",
            "role": "admin"
        }));
    });
    let store = SessionStore::in_memory();
    let api = ApiClient::new_with_base_url(server.url("/api"), store.clone());

    let session = api.login("123.456.789-01", "secret").await.unwrap();

    assert_eq!(session.role, Role::Admin);
    assert_eq!(store.token().as_deref(), Some("jwt-token"));
    assert_eq!(store.seller_id().as_deref(), Some("s1"));
    let sent = server.received();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        Some(json!({ "cpf": "12345678901", "password": "secret" }))
    );
    assert!(sent[0].authorization.is_none());
}

#[tokio::test]
async fn failed_login_stores_nothing_and_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/login");
        then.status(401)
            .json_body(json!({ "message": "CPF ou senha inválidos" }));
    });
    let store = SessionStore::in_memory();
    let api = ApiClient::new_with_base_url(server.url("/api"), store.clone());

    let err = api.login("12345678901", "wrong").await.unwrap_err();

    assert_eq!(err.message, "CPF ou senha inválidos");
    assert!(store.token().is_none());
}

#[tokio::test]
async fn failed_login_without_message_uses_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Auth/login");
        then.status(500).body("<html>oops</html>");
    });
    let store = SessionStore::in_memory();
    let api = ApiClient::new_with_base_url(server.url("/api"), store.clone());

    let err = api.login("12345678901", "pw").await.unwrap_err();

    assert_eq!(err.message, rust_i18n::t!("errors.generic"));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn authenticated_calls_send_bearer_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Seller");
        then.status(200).json_body(json!([
            seller_json("s1", "Ana", "12345678901"),
            seller_json("s2", "Bruno", "98765432100")
        ]));
    });
    let api = ApiClient::new_with_base_url(server.url("/api"), signed_in_store());

    let sellers = api.list_sellers().await.unwrap();

    assert_eq!(sellers.len(), 2);
    assert_eq!(sellers[1].name, "Bruno");
    assert_eq!(
        server.received()[0].authorization.as_deref(),
        Some("Bearer jwt-token")
    );
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Customer");
        then.status(401).json_body(json!({}));
    });
    let store = signed_in_store();
    let api = ApiClient::new_with_base_url(server.url("/api"), store.clone());

    let err = api.list_customers().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert!(store.current().is_none());
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let api = ApiClient::new_with_base_url(server.url("/api"), SessionStore::in_memory());

    let err = api.delete_seller("s1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn crud_calls_hit_expected_endpoints() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/Customer/c1");
        then.status(200).json_body(json!({
            "id": "c1",
            "companyName": "Acme",
            "cnpj": "12345678000195",
            "address": { "zipCode": "01001000", "street": "Rua A", "number": "1",
                         "neighborhood": "Sé", "city": "São Paulo", "state": "SP" },
            "latitude": -23.5,
            "longitude": -46.6,
            "active": false
        }));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/Customer/c1");
        then.status(204).body("");
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/Customer/c1");
        then.status(200).body("");
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/Seller");
        then.status(201).json_body(json!({ "message": "Vendedor criado" }));
    });
    let api = ApiClient::new_with_base_url(server.url("/api"), signed_in_store());

    let customer = api.get_customer("c1").await.unwrap();
    assert!(!customer.active);
    let payload = CustomerPayload {
        company_name: customer.company_name.clone(),
        cnpj: customer.cnpj.clone(),
        address: customer.address.clone(),
        latitude: customer.latitude,
        longitude: customer.longitude,
        active: Some(true),
    };
    api.update_customer("c1", &payload).await.unwrap();
    api.delete_customer("c1").await.unwrap();
    api.create_seller(&SellerPayload {
        name: "Ana".into(),
        cpf: Some("12345678901".into()),
        email: "ana@example.com".into(),
        phone: None,
        password: Some("secret".into()),
        role: Some("SELLER".into()),
        active: None,
    })
    .await
    .unwrap();

    assert_eq!(server.hits(PUT, "/api/Customer/c1"), 1);
    assert_eq!(server.hits(DELETE, "/api/Customer/c1"), 1);
    let created = server
        .received()
        .into_iter()
        .find(|r| r.method == POST)
        .and_then(|r| r.body)
        .unwrap();
    assert_eq!(created["role"], "SELLER");
    assert_eq!(created["cpf"], "12345678901");
}

#[tokio::test]
async fn check_in_posts_exact_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/Visit/checkin");
        then.status(200).json_body(json!({ "message": "ok" }));
    });
    let api = ApiClient::new_with_base_url(server.url("/api"), signed_in_store());

    api.check_in(&CheckInRequest {
        customer_id: "c1".into(),
        seller_id: "s1".into(),
        latitude: -23.5,
        longitude: -46.6,
    })
    .await
    .unwrap();

    let sent = &server.received()[0];
    assert_eq!(
        sent.body,
        Some(json!({
            "customerId": "c1",
            "sellerId": "s1",
            "latitude": -23.5,
            "longitude": -46.6
        }))
    );
    assert_eq!(sent.authorization.as_deref(), Some("Bearer jwt-token"));
}

#[tokio::test]
async fn postal_lookup_maps_hits_and_misses() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(200).json_body(json!({
            "logradouro": "Praça da Sé",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(json!({ "erro": true }));
    });
    let client = PostalClient::new_with_base_url(server.url("/ws"));

    let hit = client.lookup("01001-000").await.unwrap().unwrap();
    assert_eq!(hit.localidade, "São Paulo");
    assert!(client.lookup("99999-999").await.unwrap().is_none());
    assert!(client.lookup("0100").await.unwrap().is_none());
    assert_eq!(server.received().len(), 2);
}
