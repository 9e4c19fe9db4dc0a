use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段 tuple struct，内部类型需可由 `String` 构造并可借用为 `str`（通常即 `String`）：
/// - 合并/追加派生：Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord
/// - `unique()`：随机 UUID v4，统一为小写字符串
/// - `from_uuid`、`new(value)`、`value()`、Display、FromStr、AsRef<str>、From 等便捷实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[entity_id] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => &f.unnamed[0].ty,
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct X(String);",
            )
            .to_compile_error()
            .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(st.generics.span(), "#[entity_id] does not support generics")
            .to_compile_error()
            .into();
    }

    let mut st_out = st.clone();
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Debug),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(PartialOrd),
        syn::parse_quote!(Ord),
    ];
    apply_derives(&mut st_out.attrs, required);

    let ident = &st_out.ident;

    let out = quote! {
        #st_out

        impl #ident {
            /// 生成新的唯一标识（UUID v4 的小写形式）
            pub fn unique() -> Self {
                Self::from_uuid(::uuid::Uuid::new_v4())
            }

            /// 由 UUID 构造，统一规范为小写
            pub fn from_uuid(value: ::uuid::Uuid) -> Self {
                Self(<#inner_ty as ::core::convert::From<::std::string::String>>::from(
                    value.to_string().to_lowercase(),
                ))
            }

            pub fn new(value: impl ::core::convert::Into<#inner_ty>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &str {
                ::core::convert::AsRef::<str>::as_ref(&self.0)
            }
        }

        impl ::std::str::FromStr for #ident {
            type Err = ::core::convert::Infallible;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl ::core::convert::AsRef<str> for #ident {
            fn as_ref(&self) -> &str { self.value() }
        }

        impl ::core::convert::From<#inner_ty> for #ident {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }

        impl ::core::convert::From<&str> for #ident {
            fn from(value: &str) -> Self {
                Self(<#inner_ty as ::core::convert::From<::std::string::String>>::from(value.to_string()))
            }
        }

        impl ::core::convert::From<::uuid::Uuid> for #ident {
            fn from(value: ::uuid::Uuid) -> Self { Self::from_uuid(value) }
        }

        impl ::core::convert::From<#ident> for #inner_ty {
            fn from(value: #ident) -> Self { value.0 }
        }
    };

    TokenStream::from(out)
}
