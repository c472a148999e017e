use pretty_assertions::assert_eq;
use stencil::{schema::mapping::reverse, Model};

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Account {
    #[key]
    #[column("account_id")]
    id: u64,

    #[column("mail")]
    email: String,

    #[skip]
    session_token: Option<String>,

    display_name: String,
}

#[test]
fn default_table_name_is_pluralized() {
    assert_eq!(Account::statements().unwrap().table_name, "accounts");
}

#[test]
fn key_attribute_resolves_through_column_override() {
    let stmts = Account::statements().unwrap();

    assert_eq!(stmts.primary_key, "account_id");
    assert_eq!(
        stmts.retrieve,
        "SELECT `account_id`, `mail`, `display_name` FROM `accounts` WHERE `account_id` = ?"
    );
}

#[test]
fn skipped_field_is_absent_everywhere() {
    let stmts = Account::statements().unwrap();

    for sql in [&stmts.create, &stmts.retrieve, &stmts.update, &stmts.delete] {
        assert!(!sql.contains("session"), "{sql}");
    }
    assert!(!stmts.field_to_column.contains_key("session_token"));

    let schema = Account::schema();
    assert_eq!(schema.fields.len(), 4);
    assert!(schema.fields[2].ignore);
}

#[test]
fn create_placeholders_match_retained_fields() {
    let stmts = Account::statements().unwrap();

    assert_eq!(
        stmts.create,
        "INSERT INTO `accounts` (`account_id`, `mail`, `display_name`) VALUES (?, ?, ?)"
    );
    assert_eq!(stmts.create.matches('?').count(), 3);
}

#[test]
fn update_sets_unquoted_columns() {
    let stmts = Account::statements().unwrap();

    assert_eq!(
        stmts.update,
        "UPDATE `accounts` SET account_id = ?, mail = ?, display_name = ? WHERE `account_id` = ?"
    );
}

#[test]
fn mappings_are_inverse() {
    let stmts = Account::statements().unwrap();

    assert_eq!(reverse(&stmts.field_to_column), stmts.column_to_field);
    assert_eq!(stmts.column_to_field["mail"], "email");
}
