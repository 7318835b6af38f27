//! Derive macros for the Reflux framework
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! unidirectional state containers with Reflux.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `reflux_core::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use reflux_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { id: u64, text: String },
//!     ToggleTodo { id: u64 },
//! }
//!
//! // Generated impl:
//! use reflux_core::Action as _;
//! assert_eq!(TodoAction::ToggleTodo { id: 0 }.name(), "ToggleTodo");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for action enums
///
/// Implements `reflux_core::Action`, whose `name()` method returns the
/// variant name as a `&'static str`. The store uses it for structured
/// logging, so a dispatch trace reads `action = "ToggleTodo"` rather than a
/// full debug dump of the payload.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if applied
/// to a non-enum type.
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAction {
///     AddTodo { id: u64, text: String },
///     ToggleTodo { id: u64 },
///     SetVisibilityFilter { filter: VisibilityFilter },
/// }
///
/// // Usage:
/// let action = TodoAction::AddTodo { id: 0, text: "Learn Reflux".into() };
/// assert_eq!(action.name(), "AddTodo");
/// ```
#[proc_macro_derive(Action)]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Generate name() match arms, one per variant
    let name_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let name_str = variant_name.to_string();
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #name_str, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #name_str, },
            Fields::Unit => quote! { Self::#variant_name => #name_str, },
        }
    });

    let expanded = quote! {
        impl ::reflux_core::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
