extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};

use quote::quote;
use syn::visit_mut::VisitMut;
use syn::{parse_macro_input, ItemImpl};

mod operation_syntax;
use operation_syntax::*;

mod search_replace;
use search_replace::*;

/// Stamps out a generic impl block once per listed operation.
///
/// ```ignore
/// #[expand_impl(
///     Float32<T=f32>,
///     Int64<T=i64>,
/// )]
/// impl<T> Element for T {
///     const DTYPE: DType = DType::Placeholder;
/// }
/// ```
///
/// expands to `impl Element for f32 { const DTYPE: DType = DType::Float32; }`
/// and `impl Element for i64 { const DTYPE: DType = DType::Int64; }`.
#[proc_macro_attribute]
pub fn expand_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    // Parse input and impl block.
    let operation_sequence = parse_macro_input!(attr as OperationSequence);
    let item = parse_macro_input!(item as ItemImpl);

    let mut impl_blocks = Vec::new();

    for operation in operation_sequence.iter() {
        let mut impl_block = item.clone();

        // Visitor that replaces `Placeholder` path segments by the operation's name.
        let mut placeholder_visitor = FindReplacePathSegment {
            find: Ident::new("Placeholder", Span::call_site()),
            replace: operation.ident.clone(),
        };
        placeholder_visitor.visit_item_impl_mut(&mut impl_block);

        // Marginalize generics that have an equality bound.
        for margin in operation.margins.iter() {
            let mut generics_visitor = RemoveGenerics {
                find: margin.lhs_ty.clone(),
            };
            let mut type_visitor = FindReplaceType {
                find: margin.lhs_ty.clone(),
                replace: margin.rhs_ty.clone(),
            };
            generics_visitor.visit_item_impl_mut(&mut impl_block);
            type_visitor.visit_item_impl_mut(&mut impl_block);
        }

        impl_blocks.push(impl_block);
    }

    let result = quote! {
        #(#impl_blocks)*
    };
    result.into()
}
