//! Derive macro for `swimdesk_validation::ParamsModel`.
//!
//! Generates a `<Struct>Field` enum and the ordered rule table of a params
//! model from `#[params(...)]` attributes.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Ident, LitStr, Path,
    PathArguments, Type,
};

/// Derive `swimdesk_validation::ParamsModel` from field rules.
///
/// Container attributes: `update`, `check = "path"`, `name = "..."`.
/// Field attributes: `field = "key"`, `label = "..."`, `flatten`, and one rule
/// (`integer(..)`, `string(..)`, `decimal`, `boolean`, `string_boolean`,
/// `date`, `iso_date`, `json`, `array(..)`, `constant = "Registry"`,
/// `comma_constants = "Registry"`, `comma_integers(min = ..)`).
/// Fields typed `Option<T>` are optional.
#[proc_macro_derive(Params, attributes(params))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_params(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_params(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let container = parse_container(&input.attrs)?;
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Params can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Params requires named fields",
            ));
        },
    };

    let name = &input.ident;
    let vis = &input.vis;
    let field_enum = format_ident!("{}Field", name);
    let krate = quote!(::swimdesk_validation);

    let mut variants = Vec::new();
    let mut key_arms = Vec::new();
    let mut from_key_arms = Vec::new();
    let mut embedded_lookups = Vec::new();
    let mut embedded_specs = Vec::new();
    let mut own_specs = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_field(&field.attrs)?;
        let variant = format_ident!("{}", pascal_case(&ident.unraw().to_string()));

        if attrs.flatten {
            if attrs.rule.is_some() || attrs.key.is_some() || attrs.label.is_some() {
                return Err(syn::Error::new_spanned(
                    ident,
                    "flatten cannot be combined with other params attributes",
                ));
            }
            let ty = &field.ty;
            let doc = format!("Fields of the embedded `{}`.", ident.unraw());
            variants.push(quote! {
                #[doc = #doc]
                #variant(<#ty as #krate::ParamsModel>::Field)
            });
            key_arms.push(quote! {
                Self::#variant(inner) => #krate::FieldName::key(inner)
            });
            embedded_lookups.push(quote! {
                if let ::core::option::Option::Some(inner) =
                    <<#ty as #krate::ParamsModel>::Field as #krate::FieldName>::from_key(key)
                {
                    return ::core::option::Option::Some(Self::#variant(inner));
                }
            });
            embedded_specs.push(quote! {
                specs.extend(
                    <#ty as #krate::ParamsModel>::field_specs()
                        .into_iter()
                        .map(|spec| spec.map_field(#field_enum::#variant)),
                );
            });
            continue;
        }

        let Some(rule) = attrs.rule else {
            return Err(syn::Error::new_spanned(
                ident,
                "every Params field needs a rule or #[params(flatten)]",
            ));
        };
        let (optional, inner_ty) = unwrap_option(&field.ty);
        check_field_type(&rule, inner_ty)?;

        let key = attrs
            .key
            .unwrap_or_else(|| camel_case(&ident.unraw().to_string()));
        let label = attrs.label.unwrap_or_else(|| key.clone());
        let key = LitStr::new(&key, Span::call_site());
        let label = LitStr::new(&label, Span::call_site());
        let doc = format!("`{}`", key.value());
        let rule_tokens = expand_rule(&rule);

        variants.push(quote! {
            #[doc = #doc]
            #variant
        });
        key_arms.push(quote! { Self::#variant => #key });
        from_key_arms.push(quote! { #key => ::core::option::Option::Some(Self::#variant) });
        own_specs.push(quote! {
            specs.push(#krate::FieldSpec::new(
                #field_enum::#variant,
                #key,
                #label,
                #optional,
                #rule_tokens,
            ));
        });
    }

    let model_name = container
        .name
        .unwrap_or_else(|| LitStr::new(&name.to_string(), Span::call_site()));
    let update = container.update;
    let check = container.check.map(|path| {
        quote! {
            fn check(&self) -> ::core::result::Result<(), #krate::ValidationError> {
                #path(self)
            }
        }
    });
    let enum_doc = format!("Fields declared by [`{name}`].");

    Ok(quote! {
        #[doc = #enum_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #vis enum #field_enum {
            #(#variants,)*
        }

        impl #krate::FieldName for #field_enum {
            fn key(self) -> &'static str {
                match self {
                    #(#key_arms,)*
                }
            }

            fn from_key(key: &str) -> ::core::option::Option<Self> {
                #(#embedded_lookups)*
                match key {
                    #(#from_key_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #krate::ParamsModel for #name {
            type Field = #field_enum;

            const MODEL_NAME: &'static str = #model_name;
            const REQUIRES_UPDATE: bool = #update;

            fn field_specs() -> ::std::vec::Vec<#krate::FieldSpec<Self::Field>> {
                let mut specs = ::std::vec::Vec::new();
                #(#embedded_specs)*
                #(#own_specs)*
                specs
            }

            #check
        }
    })
}

#[derive(Default)]
struct ContainerAttrs {
    update: bool,
    check: Option<Path>,
    name: Option<LitStr>,
}

fn parse_container(attrs: &[Attribute]) -> Result<ContainerAttrs, syn::Error> {
    let mut container = ContainerAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("params") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("update") {
                container.update = true;
                return Ok(());
            }
            if meta.path.is_ident("check") {
                let value: LitStr = meta.value()?.parse()?;
                if container.check.is_some() {
                    return Err(meta.error("duplicate params(check = ...)"));
                }
                container.check = Some(value.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("name") {
                container.name = Some(meta.value()?.parse()?);
                return Ok(());
            }
            Err(meta.error("unsupported params attribute on container"))
        })?;
    }
    Ok(container)
}

#[derive(Default)]
struct FieldAttrs {
    key: Option<String>,
    label: Option<String>,
    flatten: bool,
    rule: Option<RuleAttr>,
}

enum RuleAttr {
    Integer(IntegerAttr),
    String {
        min: Option<Expr>,
        max: Option<Expr>,
        pattern: Option<Path>,
    },
    Decimal,
    Boolean,
    StringBoolean,
    Date,
    IsoDate,
    Json,
    Array {
        can_be_empty: bool,
        items: ArrayItemsAttr,
    },
    Constant(Path),
    CommaConstants(Path),
    CommaIntegers {
        min: Expr,
    },
}

#[derive(Default)]
struct IntegerAttr {
    min: Option<Expr>,
    max: Option<Expr>,
    default: Option<Expr>,
}

enum ArrayItemsAttr {
    Any,
    Integer(IntegerAttr),
    String,
}

impl RuleAttr {
    const fn expects(&self) -> FieldType {
        match self {
            Self::Integer(_) => FieldType::Integer,
            Self::Boolean | Self::StringBoolean => FieldType::Bool,
            Self::Array { items, .. } => FieldType::Vec(match items {
                ArrayItemsAttr::Any => ItemType::Json,
                ArrayItemsAttr::Integer(_) => ItemType::Integer,
                ArrayItemsAttr::String => ItemType::Text,
            }),
            Self::Constant(_) => FieldType::Any,
            Self::String { .. }
            | Self::Decimal
            | Self::Date
            | Self::IsoDate
            | Self::Json
            | Self::CommaConstants(_)
            | Self::CommaIntegers { .. } => FieldType::Text,
        }
    }
}

fn parse_field(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("params") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                let value: LitStr = meta.value()?.parse()?;
                if parsed.key.is_some() {
                    return Err(meta.error("duplicate params(field = ...)"));
                }
                parsed.key = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("label") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.label = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("flatten") {
                parsed.flatten = true;
                return Ok(());
            }
            let rule = parse_rule(&meta)?;
            if parsed.rule.is_some() {
                return Err(meta.error("a Params field accepts exactly one rule"));
            }
            parsed.rule = Some(rule);
            Ok(())
        })?;
    }
    Ok(parsed)
}

fn has_arguments(meta: &ParseNestedMeta<'_>) -> bool {
    meta.input.peek(syn::token::Paren)
}

fn parse_rule(meta: &ParseNestedMeta<'_>) -> Result<RuleAttr, syn::Error> {
    let path = &meta.path;
    if path.is_ident("integer") {
        return parse_integer(meta).map(RuleAttr::Integer);
    }
    if path.is_ident("string") {
        let mut min = None;
        let mut max = None;
        let mut pattern = None;
        if has_arguments(meta) {
            meta.parse_nested_meta(|nested| {
                if nested.path.is_ident("min") {
                    min = Some(nested.value()?.parse()?);
                    return Ok(());
                }
                if nested.path.is_ident("max") {
                    max = Some(nested.value()?.parse()?);
                    return Ok(());
                }
                if nested.path.is_ident("pattern") {
                    let value: LitStr = nested.value()?.parse()?;
                    pattern = Some(value.parse()?);
                    return Ok(());
                }
                Err(nested.error("unsupported string attribute"))
            })?;
        }
        return Ok(RuleAttr::String { min, max, pattern });
    }
    if path.is_ident("array") {
        let mut can_be_empty = false;
        let mut items = ArrayItemsAttr::Any;
        let mut item_bounds = IntegerAttr::default();
        if has_arguments(meta) {
            meta.parse_nested_meta(|nested| {
                if nested.path.is_ident("can_be_empty") {
                    can_be_empty = true;
                    return Ok(());
                }
                if nested.path.is_ident("items") {
                    let value: LitStr = nested.value()?.parse()?;
                    items = match value.value().as_str() {
                        "integer" => ArrayItemsAttr::Integer(IntegerAttr::default()),
                        "string" => ArrayItemsAttr::String,
                        _ => {
                            return Err(syn::Error::new_spanned(
                                value,
                                "items must be \"integer\" or \"string\"",
                            ));
                        },
                    };
                    return Ok(());
                }
                if nested.path.is_ident("min") {
                    item_bounds.min = Some(nested.value()?.parse()?);
                    return Ok(());
                }
                if nested.path.is_ident("max") {
                    item_bounds.max = Some(nested.value()?.parse()?);
                    return Ok(());
                }
                Err(nested.error("unsupported array attribute"))
            })?;
        }
        if let ArrayItemsAttr::Integer(bounds) = &mut items {
            *bounds = item_bounds;
        } else if item_bounds.min.is_some() || item_bounds.max.is_some() {
            return Err(meta.error("array min/max require items = \"integer\""));
        }
        return Ok(RuleAttr::Array {
            can_be_empty,
            items,
        });
    }
    if path.is_ident("constant") {
        let value: LitStr = meta.value()?.parse()?;
        return Ok(RuleAttr::Constant(value.parse()?));
    }
    if path.is_ident("comma_constants") {
        let value: LitStr = meta.value()?.parse()?;
        return Ok(RuleAttr::CommaConstants(value.parse()?));
    }
    if path.is_ident("comma_integers") {
        let mut min = None;
        meta.parse_nested_meta(|nested| {
            if nested.path.is_ident("min") {
                min = Some(nested.value()?.parse()?);
                return Ok(());
            }
            Err(nested.error("unsupported comma_integers attribute"))
        })?;
        let Some(min) = min else {
            return Err(meta.error("comma_integers requires min"));
        };
        return Ok(RuleAttr::CommaIntegers { min });
    }
    let flag = [
        ("decimal", RuleAttr::Decimal),
        ("boolean", RuleAttr::Boolean),
        ("string_boolean", RuleAttr::StringBoolean),
        ("date", RuleAttr::Date),
        ("iso_date", RuleAttr::IsoDate),
        ("json", RuleAttr::Json),
    ]
    .into_iter()
    .find(|(name, _)| path.is_ident(name));
    flag.map(|(_, rule)| rule)
        .ok_or_else(|| meta.error("unsupported params attribute on field"))
}

fn parse_integer(meta: &ParseNestedMeta<'_>) -> Result<IntegerAttr, syn::Error> {
    let mut parsed = IntegerAttr::default();
    if !has_arguments(meta) {
        return Ok(parsed);
    }
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("min") {
            parsed.min = Some(nested.value()?.parse()?);
            return Ok(());
        }
        if nested.path.is_ident("max") {
            parsed.max = Some(nested.value()?.parse()?);
            return Ok(());
        }
        if nested.path.is_ident("default") {
            parsed.default = Some(nested.value()?.parse()?);
            return Ok(());
        }
        Err(nested.error("unsupported integer attribute"))
    })?;
    Ok(parsed)
}

fn optional_tokens<T: quote::ToTokens>(value: Option<&T>) -> proc_macro2::TokenStream {
    value.map_or_else(
        || quote!(::core::option::Option::None),
        |value| quote!(::core::option::Option::Some(#value)),
    )
}

fn expand_integer(attr: &IntegerAttr) -> proc_macro2::TokenStream {
    let min = optional_tokens(attr.min.as_ref());
    let max = optional_tokens(attr.max.as_ref());
    let default = optional_tokens(attr.default.as_ref());
    quote! {
        ::swimdesk_validation::IntegerRule {
            min: #min,
            max: #max,
            default: #default,
        }
    }
}

fn expand_rule(rule: &RuleAttr) -> proc_macro2::TokenStream {
    let krate = quote!(::swimdesk_validation);
    match rule {
        RuleAttr::Integer(attr) => {
            let integer = expand_integer(attr);
            quote!(#krate::Rule::Integer(#integer))
        },
        RuleAttr::String { min, max, pattern } => {
            let min = optional_tokens(min.as_ref());
            let max = optional_tokens(max.as_ref());
            let pattern = pattern.as_ref().map_or_else(
                || quote!(::core::option::Option::None),
                |pattern| quote!(::core::option::Option::Some(&#pattern)),
            );
            quote! {
                #krate::Rule::String(#krate::StringRule {
                    min: #min,
                    max: #max,
                    pattern: #pattern,
                })
            }
        },
        RuleAttr::Decimal => quote!(#krate::Rule::Decimal),
        RuleAttr::Boolean => quote!(#krate::Rule::Boolean),
        RuleAttr::StringBoolean => quote!(#krate::Rule::StringBoolean),
        RuleAttr::Date => quote!(#krate::Rule::DateString),
        RuleAttr::IsoDate => quote!(#krate::Rule::IsoDateString),
        RuleAttr::Json => quote!(#krate::Rule::JsonString),
        RuleAttr::Array {
            can_be_empty,
            items,
        } => {
            let items = match items {
                ArrayItemsAttr::Any => quote!(#krate::ArrayItems::Any),
                ArrayItemsAttr::Integer(attr) => {
                    let integer = expand_integer(attr);
                    quote!(#krate::ArrayItems::Integer(#integer))
                },
                ArrayItemsAttr::String => {
                    quote!(#krate::ArrayItems::String(#krate::StringRule {
                        min: ::core::option::Option::None,
                        max: ::core::option::Option::None,
                        pattern: ::core::option::Option::None,
                    }))
                },
            };
            quote! {
                #krate::Rule::Array(#krate::ArrayRule {
                    can_be_empty: #can_be_empty,
                    items: #items,
                })
            }
        },
        RuleAttr::Constant(registry) => quote! {
            #krate::Rule::Constant(#krate::ConstantRule {
                allowed: <#registry as #krate::ConstantRegistry>::KEYS,
            })
        },
        RuleAttr::CommaConstants(registry) => quote! {
            #krate::Rule::CommaSeparatedConstant(#krate::ConstantRule {
                allowed: <#registry as #krate::ConstantRegistry>::KEYS,
            })
        },
        RuleAttr::CommaIntegers { min } => quote! {
            #krate::Rule::CommaSeparatedIntegers(#krate::CommaIntegersRule { min: #min })
        },
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FieldType {
    Integer,
    Bool,
    Text,
    Vec(ItemType),
    Any,
}

/// Element type an `array` rule normalizes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ItemType {
    Json,
    Integer,
    Text,
}

// Each rule pins the exact Rust type its primitive normalizes to.
fn check_field_type(rule: &RuleAttr, ty: &Type) -> Result<(), syn::Error> {
    let (ok, message) = match rule.expects() {
        FieldType::Any => (true, ""),
        FieldType::Integer => (is_integer(ty), "integer rules require an i64 field"),
        FieldType::Bool => (
            last_segment_is(ty, "bool"),
            "boolean rules require a bool field",
        ),
        FieldType::Text => (
            is_string_like(ty),
            "string-shaped rules require a String field",
        ),
        FieldType::Vec(ItemType::Json) => (
            vec_item(ty).is_some_and(|item| last_segment_is(item, "Value")),
            "array rules without items require a Vec<Value> field",
        ),
        FieldType::Vec(ItemType::Integer) => (
            vec_item(ty).is_some_and(is_integer),
            "array(items = \"integer\") requires a Vec<i64> field",
        ),
        FieldType::Vec(ItemType::Text) => (
            vec_item(ty).is_some_and(is_string_like),
            "array(items = \"string\") requires a Vec<String> field",
        ),
    };
    if ok {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(ty, message))
    }
}

fn unwrap_option(ty: &Type) -> (bool, &Type) {
    option_inner(ty).map_or((false, ty), |inner| (true, inner))
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    first_type_argument(&segment.arguments)
}

fn last_segment_is(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name),
        _ => false,
    }
}

fn is_string_like(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return false;
            };
            if segment.ident == "String" {
                return true;
            }
            segment.ident == "Box"
                && first_type_argument(&segment.arguments)
                    .is_some_and(|inner| last_segment_is(inner, "str"))
        },
        _ => false,
    }
}

fn is_integer(ty: &Type) -> bool {
    last_segment_is(ty, "i64")
}

fn vec_item(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    first_type_argument(&segment.arguments)
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

fn camel_case(snake: &str) -> String {
    let pascal = pascal_case(snake);
    let mut chars = pascal.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
