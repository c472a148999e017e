use pretty_assertions::assert_eq;
use stencil::{schema, Config, NamingRule, PlaceholderSeparator};
use tests::models;

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Customer {
    id: u64,
    full_name: String,
    deleted: bool,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Invoice {
    #[key]
    number: String,
    customer_id: u64,
    total_cents: i64,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
struct Draft {
    body: String,
}

#[allow(dead_code)]
#[derive(stencil::Model)]
#[table = "invoices"]
struct InvoiceCopy {
    #[key]
    number: String,
}

#[test]
fn snake_case_config_resolves_rust_field_names() {
    tests::init_tracing();

    let registry = models!(Customer, Invoice)
        .config(Config::snake_case())
        .build()
        .unwrap();

    let customer = registry.statements::<Customer>().unwrap();
    assert_eq!(customer.primary_key, "id");
    assert_eq!(
        customer.delete,
        "UPDATE `customers` SET `deleted` = 0 WHERE `id` = ?"
    );

    let invoice = registry.statements::<Invoice>().unwrap();
    assert_eq!(
        invoice.retrieve,
        "SELECT `number`, `customer_id`, `total_cents` FROM `invoices` WHERE `number` = ?"
    );
}

#[test]
fn default_config_has_no_key_for_lowercase_id() {
    let err = models!(Customer).build().unwrap_err();

    assert!(err.is_missing_primary_key());
    assert_eq!(
        err.to_string(),
        "failed to register model `Customer`: no primary key found for type `Customer`"
    );
}

#[test]
fn build_fails_on_first_invalid_model() {
    let err = models!(Invoice, Draft)
        .config(Config::snake_case())
        .build()
        .unwrap_err();

    assert!(err.is_missing_primary_key());
    assert!(err.to_string().contains("`Draft`"));
}

#[test]
fn table_prefix() {
    let registry = models!(Invoice).table_name_prefix("billing_").build().unwrap();

    let invoice = registry.statements::<Invoice>().unwrap();
    assert_eq!(invoice.table_name, "billing_invoices");
    assert_eq!(
        invoice.delete,
        "DELETE FROM `billing_invoices` WHERE `number` = ?"
    );
    assert!(registry.table("billing_invoices").is_some());
    assert!(registry.table("invoices").is_none());
}

#[test]
fn table_prefix_survives_config_in_either_order() {
    let prefix_first = stencil::Registry::builder()
        .table_name_prefix("app_")
        .config(Config::default())
        .register::<Invoice>()
        .build()
        .unwrap();

    let config_first = stencil::Registry::builder()
        .config(Config::default())
        .table_name_prefix("app_")
        .register::<Invoice>()
        .build()
        .unwrap();

    for registry in [&prefix_first, &config_first] {
        assert_eq!(
            registry.iter().map(|s| s.table_name.as_str()).collect::<Vec<_>>(),
            ["app_invoices"]
        );
        assert_eq!(
            registry.config().table_name_prefix.as_deref(),
            Some("app_")
        );
    }
}

#[test]
fn builder_prefix_overrides_config_prefix() {
    let registry = stencil::Registry::builder()
        .table_name_prefix("app_")
        .config(Config::new().table_name_prefix("legacy_"))
        .register::<Invoice>()
        .build()
        .unwrap();

    assert!(registry.table("app_invoices").is_some());
    assert!(registry.table("legacy_invoices").is_none());
}

#[test]
fn lookup_of_unregistered_model() {
    let registry = models!(Invoice).build().unwrap();

    let err = registry.statements::<Customer>().unwrap_err();
    assert!(err.is_model_not_registered());
    assert_eq!(err.to_string(), "model `Customer` is not registered");
}

#[test]
fn two_models_on_one_table() {
    let err = models!(Invoice, InvoiceCopy).build().unwrap_err();

    assert!(err.is_duplicate_table());
    assert_eq!(
        err.to_string(),
        "table `invoices` is mapped by both `Invoice` and `InvoiceCopy`"
    );
}

#[test]
fn registering_twice_is_a_no_op() {
    let registry = models!(Invoice, Invoice).build().unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn hand_built_schema() {
    let registry = stencil::Registry::builder()
        .config(
            Config::new()
                .naming(NamingRule::SnakeCase)
                .placeholder_separator(PlaceholderSeparator::Space),
        )
        .register_schema(
            schema::Model::new("ApiKey", "api_keys")
                .field(schema::Field::new("Id"))
                .field(schema::Field::new("OwnerID"))
                .field(schema::Field::new("Secret").ignore()),
        )
        .build()
        .unwrap();

    let stmts = registry.table("api_keys").unwrap();
    assert_eq!(
        stmts.create,
        "INSERT INTO `api_keys` (`id`, `owner_id`) VALUES (? ?)"
    );
    assert_eq!(registry.iter().count(), 1);
}

#[test]
fn strict_columns_reject_shared_column() {
    let err = stencil::Registry::builder()
        .config(Config::new().strict_columns(true))
        .register_schema(
            schema::Model::new("Doc", "docs")
                .field(schema::Field::new("Id"))
                .field(schema::Field::new("Title"))
                .field(schema::Field::new("Name").column("title")),
        )
        .build()
        .unwrap_err();

    assert!(err.is_duplicate_column());
}

#[test]
fn statements_serialize_to_json() {
    let registry = models!(Invoice).build().unwrap();

    let json = serde_json::to_value(registry.statements::<Invoice>().unwrap()).unwrap();

    assert_eq!(json["primary_key"], "number");
    assert_eq!(json["field_to_column"]["total_cents"], "total_cents");
}
