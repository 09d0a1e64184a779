//! 宏工具函数

use syn::{Error, Field, GenericArgument, LitStr, PathArguments, Result, Type, Visibility};

/// 依赖字段槽位类型名
const WIRED_TYPE: &str = "Wired";

/// 字段标签属性名
const TAG_ATTRIBUTE: &str = "boot";

/// 提取 `Wired<T>` 的类型参数
pub fn wired_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != WIRED_TYPE {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// 检查类型是否为 trait object（`dyn Trait`）
pub fn is_trait_object(ty: &Type) -> bool {
    match ty {
        Type::TraitObject(_) => true,
        Type::Paren(paren) => is_trait_object(&paren.elem),
        Type::Group(group) => is_trait_object(&group.elem),
        _ => false,
    }
}

/// 检查字段是否可写（`pub`）
pub fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// 提取字段的 `#[boot("...")]` 标签原文
pub fn boot_tag(field: &Field) -> Result<Option<LitStr>> {
    let mut tag = None;
    for attr in field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident(TAG_ATTRIBUTE))
    {
        if tag.is_some() {
            return Err(Error::new_spanned(attr, "字段只能有一个 #[boot(...)] 标签"));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(tag)
}
