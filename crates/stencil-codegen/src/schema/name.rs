use heck::ToSnakeCase;

/// Default table name for a model: the snake_case type name, pluralized.
pub(crate) fn table_name(ident: &syn::Ident) -> String {
    let snake = ident.to_string().to_snake_case();

    // Only the last word is pluralized: `BlogPost` -> `blog_posts`
    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(&snake, 2, false),
    }
}
