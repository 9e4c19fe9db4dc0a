use crate::derive_utils::{apply_derives, reject_derives};
use crate::field_utils::ensure_leading_field;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Fields, Item, ItemStruct, LitBool, Result, Type, parse_macro_input};

/// #[entity] 宏实现
/// - 若缺失则追加字段 `id: IdType`，并置于字段最前
/// - 自动实现 `::catalogue_domain::entity::Entity`（id）
/// - 相等性与哈希仅按 `id` 计算，因此禁止用户再派生 `PartialEq`/`Eq`/`Hash`
/// - 支持参数：`#[entity(id = IdType, debug = true|false)]`；
///   - `id` 默认 `String`
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = EntityArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as Item);
    let Item::Struct(st) = input else {
        return syn::Error::new(input.span(), "#[entity] only on struct")
            .to_compile_error()
            .into();
    };

    match expand_struct(args, st) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_struct(args: EntityArgs, mut st: ItemStruct) -> Result<TokenStream2> {
    reject_derives(
        &st.attrs,
        &["PartialEq", "Eq", "Hash"],
        "#[entity] compares entities by id",
    )?;

    let span = st.span();
    let Fields::Named(fields_named) = &mut st.fields else {
        return Err(syn::Error::new(span, "only supports named-field struct"));
    };

    let id_type = args.id.unwrap_or_else(|| syn::parse_quote! { String });
    ensure_leading_field(fields_named, "id", &id_type);

    let mut required: Vec<syn::Path> = Vec::with_capacity(4);
    if args.debug.unwrap_or(true) {
        required.push(syn::parse_quote!(Debug));
    }
    required.extend([
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ]);
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics ::catalogue_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> &Self::Id { &self.id }
        }

        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool { self.id == other.id }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                ::core::hash::Hash::hash(&self.id, state)
            }
        }
    })
}

#[derive(Default)]
struct EntityArgs {
    id: Option<Type>,
    debug: Option<bool>,
}

impl EntityArgs {
    fn parse(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("id") {
            if self.id.is_some() {
                return Err(meta.error("duplicate key 'id' in attribute"));
            }
            self.id = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("debug") {
            if self.debug.is_some() {
                return Err(meta.error("duplicate key 'debug' in attribute"));
            }
            let lit: LitBool = meta.value()?.parse()?;
            self.debug = Some(lit.value);
            Ok(())
        } else {
            Err(meta.error("unknown key in attribute; expected 'id' or 'debug'"))
        }
    }
}
