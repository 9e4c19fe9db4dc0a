use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Item, LitBool, Result, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Clone, (Debug 可控), (Default 可控), Serialize, Deserialize, PartialEq, Eq, Hash
/// - 参数：`#[value_object(debug = true|false, default = true|false)]`，
///   `debug` 默认 true，`default` 默认 false（值对象多数没有合理的缺省值）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = ValueObjectArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let mut input = parse_macro_input!(item as Item);
    let required = args.derives();

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

#[derive(Default)]
struct ValueObjectArgs {
    debug: Option<bool>,
    default: Option<bool>,
}

impl ValueObjectArgs {
    fn parse(&mut self, meta: ParseNestedMeta) -> Result<()> {
        let (slot, key) = if meta.path.is_ident("debug") {
            (&mut self.debug, "debug")
        } else if meta.path.is_ident("default") {
            (&mut self.default, "default")
        } else {
            return Err(meta.error("unknown key in attribute; expected 'debug' or 'default'"));
        };
        if slot.is_some() {
            return Err(meta.error(format!("duplicate key '{key}' in attribute")));
        }
        let lit: LitBool = meta.value()?.parse()?;
        *slot = Some(lit.value);
        Ok(())
    }

    fn derives(&self) -> Vec<syn::Path> {
        let mut required: Vec<syn::Path> = Vec::with_capacity(8);
        if self.debug.unwrap_or(true) {
            required.push(syn::parse_quote!(Debug));
        }
        if self.default.unwrap_or(false) {
            required.push(syn::parse_quote!(Default));
        }
        required.extend([
            syn::parse_quote!(Clone),
            syn::parse_quote!(serde::Serialize),
            syn::parse_quote!(serde::Deserialize),
            syn::parse_quote!(PartialEq),
            syn::parse_quote!(Eq),
            syn::parse_quote!(Hash),
        ]);
        required
    }
}
