use syn::{Field, FieldsNamed, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体以给定字段开头
/// - 若已存在同名字段则复用原定义（保留其属性与可见性），并移至最前；
/// - 否则以给定类型新建字段；
/// - 其余字段保持原始相对顺序。
pub(crate) fn ensure_leading_field(fields_named: &mut FieldsNamed, name: &str, ty: &Type) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    let is_named = |f: &Field| f.ident.as_ref().map(|i| i == name).unwrap_or(false);

    match old_named.iter().find(|f| is_named(f)) {
        Some(existing) => new_named.push(existing.clone()),
        None => {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            let field: Field = syn::parse_quote! { #ident: #ty };
            new_named.push(field);
        }
    }

    for f in old_named.into_iter().filter(|f| !is_named(f)) {
        new_named.push(f);
    }

    fields_named.named = new_named;
}
