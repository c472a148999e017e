use crate::{schema, Config, Error, Model, ModelStatements, Result};

use indexmap::IndexMap;
use std::any::TypeId;

/// Generated statements for a set of models, sharing one [`Config`].
///
/// Every model is validated when the registry is built, so lookups never
/// generate anything.
#[derive(Debug)]
pub struct Registry {
    config: Config,

    /// Statements keyed by table name, in registration order
    tables: IndexMap<String, ModelStatements>,

    /// Maps registered Rust types to their table
    types: IndexMap<TypeId, String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// Applied over `config` when building, whichever was set first
    table_name_prefix: Option<String>,

    /// Model descriptors, with the Rust type they came from when registered
    /// through [`Builder::register`]
    models: Vec<(Option<TypeId>, schema::Model)>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the statements of a registered model type.
    pub fn statements<T: Model>(&self) -> Result<&ModelStatements> {
        self.types
            .get(&TypeId::of::<T>())
            .and_then(|table| self.tables.get(table))
            .ok_or_else(|| Error::model_not_registered(T::NAME))
    }

    /// Returns the statements of the model mapped to `table`.
    pub fn table(&self, table: &str) -> Option<&ModelStatements> {
        self.tables.get(table)
    }

    /// All registered statements, in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ModelStatements> + '_ {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Builder {
    /// Set the configuration used for every registered model. A prefix set
    /// through [`Builder::table_name_prefix`] takes precedence over the
    /// config's own.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn register<T: Model>(&mut self) -> &mut Self {
        let id = TypeId::of::<T>();

        if self.models.iter().any(|(registered, _)| *registered == Some(id)) {
            tracing::debug!(model = T::NAME, "model already registered");
            return self;
        }

        self.models.push((Some(id), T::schema()));
        self
    }

    /// Registers a hand-built model descriptor. Its statements can only be
    /// looked up by table name.
    pub fn register_schema(&mut self, model: schema::Model) -> &mut Self {
        self.models.push((None, model));
        self
    }

    /// Generates statements for every registered model.
    ///
    /// Fails on the first model that cannot be resolved, or when two models
    /// map to the same table.
    pub fn build(&self) -> Result<Registry> {
        let mut config = self.config.clone();
        if let Some(prefix) = &self.table_name_prefix {
            config.table_name_prefix = Some(prefix.clone());
        }

        let mut tables = IndexMap::with_capacity(self.models.len());
        let mut owners: IndexMap<String, &str> = IndexMap::with_capacity(self.models.len());
        let mut types = IndexMap::new();

        for (id, model) in &self.models {
            let statements = ModelStatements::new(model, &config).map_err(|err| {
                err.context(stencil_core::err!("failed to register model `{}`", model.name))
            })?;

            let table = statements.table_name.clone();

            if let Some(first) = owners.insert(table.clone(), &model.name) {
                return Err(Error::duplicate_table(table, first, &model.name));
            }

            if let Some(id) = id {
                types.insert(*id, table.clone());
            }

            tables.insert(table, statements);
        }

        tracing::debug!(models = tables.len(), "built registry");

        Ok(Registry {
            config,
            tables,
            types,
        })
    }
}
