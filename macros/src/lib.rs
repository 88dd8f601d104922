use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse::Parser, punctuated::Punctuated, Token};

/// How a channel is brought into its valid range when a model is created.
enum Clamp {
    /// Saturate to the inclusive range `lo..=hi`.
    Range(syn::Expr, syn::Expr),
    /// Wrap around the color wheel.
    Hue,
    /// No bounds, only NaN is replaced.
    Unbounded,
}

struct Channel {
    ident: syn::Ident,
    clamp: Clamp,
}

fn is_attr(attr: &syn::Attribute, name: &str) -> bool {
    attr.path().is_ident(name)
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must be declared with named fields.")
        }
        .into();
    };

    let mut channels: Vec<Channel> = vec![];
    let mut tags: Vec<(syn::Ident, syn::Type)> = vec![];

    for field in named.named.iter_mut() {
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let mut clamp = Clamp::Unbounded;
        let mut is_tag = false;

        for attr in field.attrs.iter() {
            if is_attr(attr, "tag") {
                is_tag = true;
            } else if is_attr(attr, "hue") {
                clamp = Clamp::Hue;
            } else if is_attr(attr, "range") {
                let bounds = match attr
                    .parse_args_with(Punctuated::<syn::Expr, Token![,]>::parse_terminated)
                {
                    Ok(bounds) => bounds,
                    Err(err) => return err.to_compile_error().into(),
                };
                let mut bounds = bounds.into_iter();
                let (Some(lo), Some(hi), None) = (bounds.next(), bounds.next(), bounds.next())
                else {
                    return syn::Error::new_spanned(attr, "expected #[range(min, max)]")
                        .to_compile_error()
                        .into();
                };
                clamp = Clamp::Range(lo, hi);
            }
        }

        // Strip the attributes only this macro understands.
        field
            .attrs
            .retain(|a| !is_attr(a, "tag") && !is_attr(a, "hue") && !is_attr(a, "range"));

        // Make sure all the specified fields are public.
        field.vis = syn::Visibility::Public(Default::default());

        if is_tag {
            tags.push((ident, field.ty.clone()));
        } else {
            channels.push(Channel { ident, clamp });
        }
    }

    if channels.len() != 3 && channels.len() != 4 {
        return quote! {
            compile_error!("Models must have 3 or 4 channels, one for each component of the color.")
        }
        .into();
    }

    // Add some derives.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    // Phantom fields for each generic type parameter.
    let mut phantom_fields: Vec<syn::Ident> = vec![];
    let type_params = input
        .generics
        .type_params()
        .map(|p| p.ident.clone())
        .collect::<Vec<_>>();
    if let syn::Fields::Named(ref mut named) = input.fields {
        for ident in type_params {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            named.named.push(
                syn::Field::parse_named
                    .parse2(syn::parse_quote! {
                        #field_name: std::marker::PhantomData<#ident>
                    })
                    .unwrap(),
            );
        }
    }

    let struct_name = input.ident.clone();
    let model_name = struct_name.to_string();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let channel_names = channels.iter().map(|c| &c.ident).collect::<Vec<_>>();
    let channel_names_str = channel_names
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    let tag_names = tags.iter().map(|(i, _)| i).collect::<Vec<_>>();
    let tag_types = tags.iter().map(|(_, t)| t).collect::<Vec<_>>();

    let clamped = channels
        .iter()
        .map(|c| {
            let ident = &c.ident;
            match &c.clamp {
                Clamp::Range(lo, hi) => quote! { crate::math::clamp(#ident, #lo, #hi) },
                Clamp::Hue => quote! { crate::math::normalize_hue(#ident) },
                Clamp::Unbounded => quote! { crate::math::zero_if_nan(#ident) },
            }
        })
        .collect::<Vec<_>>();

    let to_components = if channels.len() == 3 {
        let [c0, c1, c2] = [channel_names[0], channel_names[1], channel_names[2]];
        quote! {
            /// Return the three channels of this model as generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#c0, self.#c1, self.#c2)
            }
        }
    } else {
        quote! {}
    };

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model. Channels outside of their
            /// valid range are clamped.
            pub fn new(
                #(#channel_names: crate::color::Component,)*
                #(#tag_names: #tag_types,)*
            ) -> Self {
                Self {
                    #(#channel_names: #clamped,)*
                    #(#tag_names,)*
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Create a new color in this model, rejecting channels that are
            /// NaN or infinite instead of coercing them.
            pub fn try_new(
                #(#channel_names: crate::color::Component,)*
                #(#tag_names: #tag_types,)*
            ) -> Result<Self, crate::Error> {
                #(
                    if !#channel_names.is_finite() {
                        return Err(crate::Error::NonFinite {
                            model: #model_name,
                            channel: #channel_names_str,
                            value: f64::from(#channel_names),
                        });
                    }
                )*

                Ok(Self::new(#(#channel_names,)* #(#tag_names,)*))
            }

            #to_components
        }

        impl #impl_gen crate::color::Model for #struct_name #type_gen #where_clause {}
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
