use proc_macro2::{Ident, TokenStream};
use quote::ToTokens;
use std::ops::Deref;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::{Pair, Punctuated};
use syn::token::{Comma, Eq, Gt, Lt};
use syn::{Result, Type};

/// `T=f32`: the generic `T` is marginalized and replaced by `f32`.
pub struct EqPredicate {
    pub lhs_ty: Ident,
    pub eq_token: Eq,
    pub rhs_ty: Type,
}

impl Parse for EqPredicate {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(EqPredicate {
            lhs_ty: input.parse()?,
            eq_token: input.parse()?,
            rhs_ty: input.parse()?,
        })
    }
}

impl ToTokens for EqPredicate {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.lhs_ty.to_tokens(tokens);
        self.eq_token.to_tokens(tokens);
        self.rhs_ty.to_tokens(tokens);
    }
}

/// One expansion of the impl block, e.g. `Float32<T=f32>`.
///
/// The identifier replaces every `Placeholder` path segment of the
/// impl block, the predicates marginalize generics.
pub struct Operation {
    pub ident: Ident,
    pub lt_token: Lt,
    pub margins: Punctuated<EqPredicate, Comma>,
    pub gt_token: Gt,
}

impl Parse for Operation {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident = input.parse()?;
        let lt_token = input.parse()?;
        let mut margins = Punctuated::new();
        loop {
            if input.peek(Gt) {
                break;
            }
            let value = input.parse()?;
            margins.push_value(value);
            if input.peek(Gt) {
                break;
            }
            let punct = input.parse()?;
            margins.push_punct(punct);
        }
        let gt_token = input.parse()?;

        Ok(Operation {
            ident,
            lt_token,
            margins,
            gt_token,
        })
    }
}

impl ToTokens for Operation {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.ident.to_tokens(tokens);
        self.lt_token.to_tokens(tokens);
        for pair in self.margins.pairs() {
            match pair {
                Pair::Punctuated(margin, comma) => {
                    margin.to_tokens(tokens);
                    comma.to_tokens(tokens);
                }
                Pair::End(margin) => {
                    margin.to_tokens(tokens);
                }
            }
        }
        self.gt_token.to_tokens(tokens);
    }
}

pub struct OperationSequence {
    pub sequence: Punctuated<Operation, Comma>,
}

impl Parse for OperationSequence {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(OperationSequence {
            sequence: Punctuated::parse_terminated(input)?,
        })
    }
}

impl Deref for OperationSequence {
    type Target = Punctuated<Operation, Comma>;
    fn deref(&self) -> &Self::Target {
        &self.sequence
    }
}
