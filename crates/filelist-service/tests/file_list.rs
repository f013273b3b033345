//! End-to-end behaviour of `FileListService` against an in-memory drive.

mod helpers;

use filelist_core::error::ErrorKind;
use filelist_core::types::EntityKind;
use filelist_drive::MemoryDrive;
use filelist_service::ListOptions;

use helpers::service;

#[tokio::test]
async fn test_empty_root() {
    let drive = MemoryDrive::new("root-id", "My Drive");
    let result = service(&drive)
        .file_list("root-id", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(result.total_folders(), 1);
    assert_eq!(result.total_files(), 0);
    assert_eq!(result.folder_tree().len(), 1);
    assert_eq!(result.folder_tree().root().id_path(), vec!["root-id"]);
    assert_eq!(result.searched_folder().name, "My Drive");
}

#[tokio::test]
async fn test_two_children_with_two_files_each() {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive
        .add_folder("c1", "child1", "root")
        .add_folder("c2", "child2", "root")
        .add_file("f1", "a.txt", "text/plain", "c1")
        .add_file("f2", "b.txt", "text/plain", "c1")
        .add_file("f3", "c.txt", "text/plain", "c2")
        .add_file("f4", "d.txt", "text/plain", "c2");

    let result = service(&drive)
        .file_list("root", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(result.folder_tree().len(), 3);
    assert_eq!(result.total_folders(), 3);
    assert_eq!(result.total_files(), 4);
    assert_eq!(result.files_in("c1").unwrap().len(), 2);
    assert_eq!(result.files_in("c2").unwrap().len(), 2);
    assert!(result.files_in("root").unwrap().is_empty());

    let per_folder: u64 = result
        .file_list()
        .iter()
        .map(|f| f.files.len() as u64)
        .sum();
    assert_eq!(per_folder, result.total_files());
    assert!(result.folder_tree().is_well_formed());
}

#[tokio::test]
async fn test_allow_list_keeps_only_matching_types() {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive
        .add_folder("pics", "Pictures", "root")
        .add_file("png", "photo.png", "image/png", "pics")
        .add_file("pdf", "scan.pdf", "application/pdf", "pics");

    let options = ListOptions::default().with_mime_types(["image/png"]);
    let result = service(&drive).file_list("root", &options).await.unwrap();

    let files = result.files_in("pics").unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, "png");
    assert_eq!(result.total_files(), 1);
}

#[tokio::test]
async fn test_custom_fields_get_cursor_field() {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive.add_file("f", "a.txt", "text/plain", "root");

    let options = ListOptions::default().with_fields("files(id,name)");
    service(&drive).file_list("root", &options).await.unwrap();

    let file_requests: Vec<String> = drive
        .requests()
        .into_iter()
        .filter(|r| r.filter.kind == EntityKind::Files)
        .map(|r| r.fields.as_str().to_string())
        .collect();
    assert_eq!(file_requests, vec!["files(id,name),nextPageToken"]);
}

#[tokio::test]
async fn test_missing_root_fails_at_metadata() {
    let drive = MemoryDrive::new("root", "My Drive");
    let err = service(&drive).folder_tree("nope").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert_eq!(drive.list_calls(), 0);
}

#[tokio::test]
async fn test_shared_root_is_crawled_with_drive_scope() {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive
        .add_detached_folder("team", "Team Folder")
        .add_folder("t1", "Specs", "team")
        .add_folder("t11", "Drafts", "t1")
        .add_file("doc", "plan.txt", "text/plain", "t11");
    drive.share("team", Some("0ATeam"));

    let result = service(&drive)
        .file_list("team", &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(result.total_folders(), 3);
    assert_eq!(result.total_files(), 1);
    assert_eq!(
        result.folder_tree().get("t11").unwrap().ancestors,
        vec!["team", "t1"]
    );
    assert!(
        drive
            .requests()
            .iter()
            .all(|r| r.drive_id.as_deref() == Some("0ATeam"))
    );
    assert!(drive.requests().iter().all(|r| r.filter.parent.is_some()));
}

#[tokio::test]
async fn test_file_failure_returns_no_result() {
    let mut drive = MemoryDrive::new("root", "My Drive");
    drive
        .add_folder("a", "A", "root")
        .add_file("f", "x.txt", "text/plain", "a");
    // Call 1 is the bulk folder scan; call 3 is the second folder's files.
    drive.fail_on_list_call(3);

    let result = service(&drive).file_list("root", &ListOptions::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_root_alias_convenience() {
    let mut drive = MemoryDrive::new("0AAroot", "My Drive");
    drive
        .add_folder("a", "A", "0AAroot")
        .add_file("f", "x.txt", "text/plain", "a");

    let svc = service(&drive);
    let tree = svc.root_folder_tree().await.unwrap();
    assert_eq!(tree.root().id, "0AAroot");
    assert_eq!(tree.len(), 2);

    let result = svc.root_file_list(&ListOptions::default()).await.unwrap();
    assert_eq!(result.total_files(), 1);
}
