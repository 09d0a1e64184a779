//! 可注入组件派生宏实现

use crate::utils::{boot_tag, is_public, is_trait_object, wired_inner};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    ext::IdentExt, punctuated::Punctuated, Attribute, Data, DeriveInput, Error, Field, Fields,
    Result, Token, Type,
};

/// 结构体属性名
const STRUCT_ATTRIBUTE: &str = "injectable";

/// 实现 #[derive(Injectable)] 宏
pub fn derive_injectable_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let owner = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    struct_name,
                    "Injectable 只支持具名字段结构体或单元结构体",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_name,
                "Injectable 只能用于结构体",
            ))
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut inject_arms = Vec::new();

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.unraw().to_string();
        let settable = is_public(&field.vis);

        let tag = match boot_tag(field)? {
            Some(lit) => quote! { ::std::option::Option::Some(#lit) },
            None => quote! { ::std::option::Option::None },
        };

        let wired = wired_inner(&field.ty);
        let target = match wired {
            Some(inner) if is_trait_object(inner) => {
                quote! { ::di_abstractions::TargetType::capability::<#inner>() }
            }
            Some(inner) => quote! { ::di_abstractions::TargetType::concrete::<#inner>() },
            None => {
                let ty = &field.ty;
                quote! { ::di_abstractions::TargetType::value::<#ty>() }
            }
        };

        descriptors.push(quote! {
            ::di_abstractions::FieldDescriptor {
                owner: #owner,
                name: #name,
                tag: #tag,
                settable: #settable,
                target: #target,
            }
        });

        if settable && wired.is_some() {
            inject_arms.push(quote! {
                #name => self.#ident.assign(value).map_err(|_| {
                    ::di_abstractions::DependencyError::not_settable(#owner, field)
                }),
            });
        }
    }

    let capabilities = generate_capabilities(&parse_provides(&input.attrs)?);

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::di_abstractions::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn inject(
                &self,
                field: &str,
                value: ::std::boxed::Box<dyn ::std::any::Any>,
            ) -> ::di_abstractions::DependencyResult<()> {
                match field {
                    #(#inject_arms)*
                    _ => {
                        ::std::mem::drop(value);
                        ::std::result::Result::Err(
                            ::di_abstractions::DependencyError::not_settable(#owner, field),
                        )
                    }
                }
            }

            #capabilities
        }
    })
}

/// 解析 `#[injectable(provides(dyn A, dyn B))]`
fn parse_provides(attrs: &[Attribute]) -> Result<Vec<Type>> {
    let mut provided = Vec::new();

    for attr in attrs
        .iter()
        .filter(|attr| attr.path().is_ident(STRUCT_ATTRIBUTE))
    {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("provides") {
                return Err(meta.error("不支持的 injectable 参数，期望 provides(...)"));
            }

            let content;
            syn::parenthesized!(content in meta.input);
            let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
            for ty in types {
                if !is_trait_object(&ty) {
                    return Err(Error::new_spanned(
                        &ty,
                        "provides 只接受 `dyn Trait` 形式的能力类型",
                    ));
                }
                provided.push(ty);
            }
            Ok(())
        })?;
    }

    Ok(provided)
}

/// 生成 `capabilities()`，没有声明能力时沿用 trait 默认实现
fn generate_capabilities(provided: &[Type]) -> TokenStream {
    if provided.is_empty() {
        return TokenStream::new();
    }

    quote! {
        fn capabilities() -> ::di_abstractions::Capabilities
        where
            Self: Sized,
        {
            ::di_abstractions::Capabilities::new()
                #(
                    .provide::<Self, #provided>(
                        |this: ::std::sync::Arc<Self>| -> ::std::sync::Arc<#provided> { this },
                    )
                )*
        }
    }
}
