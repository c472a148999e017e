use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field name as written on the struct, without any `r#` prefix
    pub(crate) name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[deletion_flag]`
    pub(crate) deletion_flag: Option<syn::Attribute>,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("deletion_flag") {
                if attrs.deletion_flag.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[deletion_flag] attribute",
                    ));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.deletion_flag = Some(attr.clone());
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.skip = true;
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if attrs.skip {
            if attrs.key.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[skip] and #[key] cannot be combined on the same field",
                ));
            }

            if attrs.deletion_flag.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[skip] and #[deletion_flag] cannot be combined on the same field",
                ));
            }

            if attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[skip] and #[column] cannot be combined on the same field",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();

        Ok(Self { name, attrs })
    }
}
