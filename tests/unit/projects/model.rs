use super::*;

#[test]
fn parses_wire_names_and_underscore_id() {
    let body: RecentProjectsBody = serde_json::from_str(
        r#"{ "projects": [{
            "_id": "64f0",
            "profilePicture": "https://cdn.example/p.png",
            "projectTitle": "Atlas",
            "projectDescription": "Maps for everyone",
            "projectLink": "https://atlas.example"
        }] }"#,
    )
    .unwrap();
    let projects = body.into_projects();
    assert_eq!(projects.len(), 1);
    let p = &projects[0];
    assert_eq!(p.id, "64f0");
    assert_eq!(p.title, "Atlas");
    assert_eq!(p.description, "Maps for everyone");
    assert_eq!(p.image_url, "https://cdn.example/p.png");
    assert_eq!(p.link.as_deref(), Some("https://atlas.example"));
}

#[test]
fn plain_id_and_missing_link() {
    let p: ProjectRecord =
        serde_json::from_str(r#"{ "id": "7", "projectTitle": "Solo" }"#).unwrap();
    assert_eq!(p.id, "7");
    assert_eq!(p.link, None);
    assert_eq!(p.description, "");
}

#[test]
fn empty_link_is_absent() {
    let p: ProjectRecord =
        serde_json::from_str(r#"{ "id": "7", "projectLink": "" }"#).unwrap();
    assert_eq!(p.link, None);
    let p: ProjectRecord =
        serde_json::from_str(r#"{ "id": "7", "projectLink": null }"#).unwrap();
    assert_eq!(p.link, None);
}

#[test]
fn missing_or_null_projects_is_empty() {
    let body: RecentProjectsBody = serde_json::from_str("{}").unwrap();
    assert!(body.into_projects().is_empty());
    let body: RecentProjectsBody = serde_json::from_str(r#"{ "projects": null }"#).unwrap();
    assert!(body.into_projects().is_empty());
}

#[test]
fn error_body_message_is_optional() {
    let b: ErrorBody = serde_json::from_str(r#"{ "message": "DB down" }"#).unwrap();
    assert_eq!(b.message.as_deref(), Some("DB down"));
    let b: ErrorBody = serde_json::from_str(r#"{ "error": true }"#).unwrap();
    assert_eq!(b.message, None);
}

#[test]
fn underscore_id_wins_when_both_ids_present() {
    let p: ProjectRecord = serde_json::from_str(
        r#"{ "_id": "64f0", "id": "64f0-virtual", "projectTitle": "Atlas" }"#,
    )
    .unwrap();
    assert_eq!(p.id, "64f0");
    assert_eq!(p.title, "Atlas");
}

#[test]
fn null_text_fields_decode_as_empty() {
    let p: ProjectRecord = serde_json::from_str(
        r#"{ "_id": "1", "profilePicture": null, "projectTitle": null,
             "projectDescription": null }"#,
    )
    .unwrap();
    assert_eq!(p.image_url, "");
    assert_eq!(p.title, "");
    assert_eq!(p.description, "");
}

#[test]
fn numeric_and_object_ids_are_stringified() {
    let p: ProjectRecord = serde_json::from_str(r#"{ "_id": 1 }"#).unwrap();
    assert_eq!(p.id, "1");
    let p: ProjectRecord =
        serde_json::from_str(r#"{ "_id": { "$oid": "65a1b2" } }"#).unwrap();
    assert_eq!(p.id, "65a1b2");
}

#[test]
fn missing_or_null_id_is_empty() {
    let p: ProjectRecord = serde_json::from_str(r#"{ "projectTitle": "Anon" }"#).unwrap();
    assert_eq!(p.id, "");
    let p: ProjectRecord = serde_json::from_str(r#"{ "_id": null, "id": "9" }"#).unwrap();
    assert_eq!(p.id, "9");
}

#[test]
fn one_odd_record_does_not_fail_the_list() {
    let body: RecentProjectsBody = serde_json::from_str(
        r#"{ "projects": [
            { "_id": "a", "id": "a", "projectTitle": "Both ids" },
            { "_id": 2, "profilePicture": null },
            { "projectTitle": "No id" }
        ] }"#,
    )
    .unwrap();
    let ids: Vec<_> = body.into_projects().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["a", "2", ""]);
}

#[test]
fn serializes_with_wire_names() {
    let p: ProjectRecord = serde_json::from_str(r#"{ "_id": "x", "projectTitle": "T" }"#).unwrap();
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["id"], "x");
    assert_eq!(v["projectTitle"], "T");
    assert!(v.get("projectLink").is_none());
}
