use pretty_assertions::assert_eq;
use stencil::Model;

#[allow(dead_code, non_snake_case)]
#[derive(stencil::Model)]
#[table = "users"]
struct User {
    Id: u64,
    Name: String,
}

#[test]
fn derived_users_statements() {
    tests::init_tracing();

    let stmts = User::statements().unwrap();

    assert_eq!(stmts.table_name, "users");
    assert_eq!(stmts.primary_key, "id");
    assert_eq!(
        stmts.create,
        "INSERT INTO `users` (`id`, `name`) VALUES (?, ?)"
    );
    assert_eq!(
        stmts.retrieve,
        "SELECT `id`, `name` FROM `users` WHERE `id` = ?"
    );
    assert_eq!(
        stmts.update,
        "UPDATE `users` SET id = ?, name = ? WHERE `id` = ?"
    );
    assert_eq!(stmts.delete, "DELETE FROM `users` WHERE `id` = ?");
}

#[test]
fn statements_are_computed_once() {
    let first = User::statements().unwrap();
    let second = User::statements().unwrap();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn statements_shared_across_threads() {
    let addrs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| User::statements().unwrap() as *const _ as usize))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addrs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn schema_lists_fields_in_declaration_order() {
    let schema = User::schema();

    assert_eq!(User::NAME, "User");
    assert_eq!(schema.name, "User");
    assert_eq!(schema.table_name, "users");
    assert_eq!(schema.field_names(), ["Id", "Name"]);
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct AuditEntry {
    message: String,
    level: u8,
}

#[test]
fn missing_primary_key_is_an_error() {
    tests::init_tracing();

    let err = AuditEntry::statements().unwrap_err();

    assert!(err.is_missing_primary_key());
    assert_eq!(err.to_string(), "no primary key found for type `AuditEntry`");

    // The failure is cached and returned again
    assert!(AuditEntry::statements().unwrap_err().is_missing_primary_key());
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Session {
    id: u64,
    token: String,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Device {
    #[key]
    id: u64,
    name: String,
}

#[test]
fn lowercase_id_needs_key_attribute() {
    // The derived cache uses the default config, which only falls back to a
    // field named `Id`
    assert!(Session::statements().unwrap_err().is_missing_primary_key());

    let device = Device::statements().unwrap();
    assert_eq!(device.primary_key, "id");
    assert_eq!(device.delete, "DELETE FROM `devices` WHERE `id` = ?");

    let registry = stencil::Registry::builder()
        .config(stencil::Config::snake_case())
        .register::<Session>()
        .build()
        .unwrap();
    assert_eq!(registry.statements::<Session>().unwrap().primary_key, "id");
}
