use serde_json::{Value, json};

use crate::helpers::{TestApp, error_message};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really an image";

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "publisher": "Chilton",
        "readDate": "2024-03-01",
        "review": "Spice.",
        "beforeThoughts": "Long book",
        "isPublic": true,
    })
}

async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.unwrap()
}

#[tokio::test]
async fn create_then_get_returns_the_same_book() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    let response = app.create_book(&user, &dune(), None).await;
    assert_eq!(response.status().as_u16(), 200);
    let created = json_body(response).await;

    assert_eq!(created["title"], "Dune");
    assert_eq!(created["author"], "Frank Herbert");
    assert_eq!(created["readDate"], "2024-03-01");
    assert_eq!(created["beforeThoughts"], "Long book");
    assert_eq!(created["userId"], user.id);
    assert_eq!(created["userNickname"], "Paul");
    assert!(created["coverImageUrl"].is_null());

    let id = created["id"].as_i64().unwrap();
    let response = app.get_book(&user, id).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn submitted_fields_are_stored_verbatim() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;
    let book = json!({
        "title": "  Dune ",
        "author": " Frank Herbert",
        "publisher": "",
        "review": "   ",
        "afterThoughts": "\tstill thinking ",
    });

    let created = json_body(app.create_book(&user, &book, None).await).await;
    let fetched = json_body(app.get_book(&user, created["id"].as_i64().unwrap()).await).await;

    for (field, expected) in [
        ("title", "  Dune "),
        ("author", " Frank Herbert"),
        ("publisher", ""),
        ("review", "   "),
        ("afterThoughts", "\tstill thinking "),
    ] {
        assert_eq!(created[field], expected, "field: {field}");
        assert_eq!(fetched[field], expected, "field: {field}");
    }
    assert!(fetched["description"].is_null());
}

#[tokio::test]
async fn create_rejects_missing_title_or_author() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    let test_cases = [
        (json!({ "author": "Frank Herbert" }), "missing title"),
        (json!({ "title": "  ", "author": "Frank Herbert" }), "blank title"),
        (json!({ "title": "Dune" }), "missing author"),
        (
            json!({ "title": "x".repeat(501), "author": "Frank Herbert" }),
            "title too long",
        ),
    ];

    for (book, case) in test_cases {
        let response = app.create_book(&user, &book, None).await;
        assert_eq!(response.status().as_u16(), 400, "case: {case}");
    }
}

#[tokio::test]
async fn create_without_token_is_401() {
    let app = TestApp::spawn().await;

    let response = app
        .http_client
        .post(app.url("/api/books"))
        .multipart(crate::helpers::book_form(&dune(), None))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn cover_image_is_stored_and_served_publicly() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    let created = json_body(app.create_book(&user, &dune(), Some(PNG_BYTES)).await).await;
    let cover_url = created["coverImageUrl"].as_str().unwrap().to_string();
    assert!(cover_url.starts_with("/api/images/"));

    let response = app.get(&cover_url).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.bytes().await.unwrap().as_ref(), PNG_BYTES);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_identity() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;
    let created = json_body(app.create_book(&user, &dune(), Some(PNG_BYTES)).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .update_book(
            &user,
            id,
            &json!({
                "title": "Dune Messiah",
                "author": "Frank Herbert",
                "isPublic": false,
            }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let updated = json_body(response).await;

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["isPublic"], false);
    assert!(updated["publisher"].is_null());
    assert!(updated["review"].is_null());
    // No new image, so the cover stays.
    assert_eq!(updated["coverImageUrl"], created["coverImageUrl"]);
}

#[tokio::test]
async fn replacing_the_cover_removes_the_old_file() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;
    let created = json_body(app.create_book(&user, &dune(), Some(PNG_BYTES)).await).await;
    let id = created["id"].as_i64().unwrap();
    let old_url = created["coverImageUrl"].as_str().unwrap().to_string();

    let updated = json_body(
        app.update_book(&user, id, &dune(), Some(&b"second cover"[..]))
            .await,
    )
    .await;
    let new_url = updated["coverImageUrl"].as_str().unwrap().to_string();

    assert_ne!(old_url, new_url);
    assert_eq!(app.get(&old_url).await.status().as_u16(), 404);
    assert_eq!(app.get(&new_url).await.status().as_u16(), 200);
}

#[tokio::test]
async fn non_owners_cannot_modify_books() {
    let app = TestApp::spawn().await;
    let owner = app.signed_in_user("Owner").await;
    let intruder = app.signed_in_user("Intruder").await;
    let created = json_body(app.create_book(&owner, &dune(), None).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.update_book(&intruder, id, &dune(), None).await;
    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_message(response).await, "Access denied");

    let response = app.delete_book(&intruder, id).await;
    assert_eq!(response.status().as_u16(), 403);

    // Still there for its owner.
    assert_eq!(app.get_book(&owner, id).await.status().as_u16(), 200);
}

#[tokio::test]
async fn visibility_depends_on_is_public() {
    let app = TestApp::spawn().await;
    let owner = app.signed_in_user("Owner").await;
    let other = app.signed_in_user("Other").await;

    let public = json_body(app.create_book(&owner, &dune(), None).await).await;
    let private = json_body(
        app.create_book(
            &owner,
            &json!({ "title": "Diary", "author": "Me", "isPublic": false }),
            None,
        )
        .await,
    )
    .await;

    let response = app.get_book(&other, public["id"].as_i64().unwrap()).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await["userNickname"], "Owner");

    let private_id = private["id"].as_i64().unwrap();
    assert_eq!(app.get_book(&other, private_id).await.status().as_u16(), 403);
    assert_eq!(app.get_book(&owner, private_id).await.status().as_u16(), 200);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;
    let created = json_body(app.create_book(&user, &dune(), Some(PNG_BYTES)).await).await;
    let id = created["id"].as_i64().unwrap();
    let cover_url = created["coverImageUrl"].as_str().unwrap().to_string();

    let response = app.delete_book(&user, id).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await["message"], "Book deleted successfully");

    assert_eq!(app.get_book(&user, id).await.status().as_u16(), 404);
    assert_eq!(
        app.update_book(&user, id, &dune(), None).await.status().as_u16(),
        404
    );
    assert_eq!(app.delete_book(&user, id).await.status().as_u16(), 404);
    assert_eq!(app.get(&cover_url).await.status().as_u16(), 404);
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    assert_eq!(app.get_book(&user, 999_999).await.status().as_u16(), 404);

    let response = app
        .http_client
        .get(app.url("/api/books/not-a-number"))
        .bearer_auth(&user.token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn list_only_returns_the_callers_books() {
    let app = TestApp::spawn().await;
    let alice = app.signed_in_user("Alice").await;
    let bob = app.signed_in_user("Bob").await;

    app.create_book(&alice, &json!({ "title": "A1", "author": "X" }), None)
        .await;
    app.create_book(&alice, &json!({ "title": "A2", "author": "X" }), None)
        .await;
    app.create_book(&bob, &json!({ "title": "B1", "author": "X" }), None)
        .await;

    let page = json_body(app.list_books(&alice, &[]).await).await;

    assert_eq!(page["totalElements"], 2);
    let owners: Vec<_> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["userId"].as_i64().unwrap())
        .collect();
    assert!(owners.iter().all(|id| *id == alice.id));
}

#[tokio::test]
async fn list_sorts_searches_and_paginates() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    for (title, author) in [
        ("Neuromancer", "William Gibson"),
        ("Dune", "Frank Herbert"),
        ("Hyperion", "Dan Simmons"),
        ("Count Zero", "William Gibson"),
    ] {
        let response = app
            .create_book(&user, &json!({ "title": title, "author": author }), None)
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let titles = |page: &Value| -> Vec<String> {
        page["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap().to_string())
            .collect()
    };

    let by_title = json_body(app.list_books(&user, &[("sortBy", "title")]).await).await;
    assert_eq!(
        titles(&by_title),
        ["Count Zero", "Dune", "Hyperion", "Neuromancer"]
    );

    let newest = json_body(app.list_books(&user, &[]).await).await;
    assert_eq!(
        titles(&newest),
        ["Count Zero", "Hyperion", "Dune", "Neuromancer"]
    );

    let gibson = json_body(
        app.list_books(&user, &[("search", "  GIBSON "), ("sortBy", "title")])
            .await,
    )
    .await;
    assert_eq!(titles(&gibson), ["Count Zero", "Neuromancer"]);

    let second_page = json_body(
        app.list_books(
            &user,
            &[("sortBy", "author"), ("page", "1"), ("size", "3")],
        )
        .await,
    )
    .await;
    assert_eq!(second_page["number"], 1);
    assert_eq!(second_page["size"], 3);
    assert_eq!(second_page["totalElements"], 4);
    assert_eq!(second_page["totalPages"], 2);
    assert_eq!(second_page["first"], false);
    assert_eq!(second_page["last"], true);
    assert_eq!(titles(&second_page).len(), 1);
}

#[tokio::test]
async fn list_rejects_non_numeric_paging() {
    let app = TestApp::spawn().await;
    let user = app.signed_in_user("Paul").await;

    let response = app.list_books(&user, &[("page", "first")]).await;

    assert_eq!(response.status().as_u16(), 400);
}
