use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Attribute, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated,
            ) {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required）
pub(crate) fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let mut final_list: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&p)) {
            final_list.push(p);
        }
    }
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let last_ident = last.ident.to_string();
            match last_ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{last_ident}"),
                _ => last_ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

// 直接在 attrs 上应用默认派生合并
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    let merged = merge_derives(existing, required);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

/// 检查用户是否手动派生了宏将自行生成的 trait（例如实体的 `PartialEq`）
pub(crate) fn reject_derives(attrs: &[Attribute], forbidden: &[&str], reason: &str) -> syn::Result<()> {
    let (_, existing) = split_derives(attrs);
    match existing.iter().find(|p| forbidden.contains(&derive_key(p).as_str())) {
        Some(p) => Err(syn::Error::new(
            p.span(),
            format!("`{}` must not be derived: {reason}", derive_key(p)),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_required_first_and_dedups_serde_paths() {
        let existing: Vec<syn::Path> = vec![
            syn::parse_quote!(Serialize),
            syn::parse_quote!(bon::Builder),
        ];
        let required: Vec<syn::Path> = vec![
            syn::parse_quote!(Clone),
            syn::parse_quote!(serde::Serialize),
        ];
        let merged = merge_derives(existing, required);
        let rendered = merged.to_token_stream().to_string();
        assert_eq!(rendered.matches("Serialize").count(), 1);
        assert!(rendered.find("Clone").unwrap() < rendered.find("Builder").unwrap());
    }

    #[test]
    fn reject_flags_forbidden_derive() {
        let attrs: Vec<Attribute> = vec![syn::parse_quote!(#[derive(Clone, PartialEq)])];
        assert!(reject_derives(&attrs, &["PartialEq"], "generated").is_err());
        assert!(reject_derives(&attrs, &["Hash"], "generated").is_ok());
    }
}
