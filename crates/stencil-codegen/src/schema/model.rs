use super::{table_name, ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table to map the model to
    pub(crate) table: String,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        // Composite primary keys are not supported, and a model has at most
        // one deletion flag.
        let mut keys = fields.iter().filter_map(|field| field.attrs.key.as_ref());
        if keys.next().is_some() {
            for attr in keys {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "only one field can be annotated with #[key]",
                ));
            }
        }

        let mut flags = fields
            .iter()
            .filter_map(|field| field.attrs.deletion_flag.as_ref());
        if flags.next().is_some() {
            for attr in flags {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "only one field can be annotated with #[deletion_flag]",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table = match &model_attr.table {
            Some(table) => table.value(),
            None => table_name(&ast.ident),
        };

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }
}
