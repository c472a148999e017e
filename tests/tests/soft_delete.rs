use pretty_assertions::assert_eq;
use stencil::Model;

#[allow(dead_code, non_snake_case)]
#[derive(stencil::Model)]
struct Post {
    Id: u64,
    Title: String,
    Deleted: bool,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
#[table = "comments"]
struct Comment {
    #[key]
    id: u64,
    body: String,
    #[deletion_flag]
    #[column("is_live")]
    live: bool,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Tag {
    #[key]
    id: u64,
    label: String,
}

#[test]
fn deleted_field_soft_deletes() {
    let stmts = Post::statements().unwrap();

    assert_eq!(stmts.delete, "UPDATE `posts` SET `deleted` = 0 WHERE `id` = ?");
    assert!(stmts.is_soft_delete());
}

#[test]
fn deletion_flag_attribute_soft_deletes() {
    let stmts = Comment::statements().unwrap();

    assert_eq!(
        stmts.delete,
        "UPDATE `comments` SET `is_live` = 0 WHERE `id` = ?"
    );
    assert_eq!(stmts.deletion_flag.as_deref(), Some("is_live"));
}

#[test]
fn no_flag_hard_deletes() {
    let stmts = Tag::statements().unwrap();

    assert_eq!(stmts.delete, "DELETE FROM `tags` WHERE `id` = ?");
    assert!(!stmts.is_soft_delete());
}
