use proc_macro2::Ident;
use std::iter::FromIterator;
use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};
use syn::{GenericParam, Generics, PathSegment, Type};

pub struct FindReplacePathSegment {
    pub find: Ident,
    pub replace: Ident,
}

pub struct FindReplaceType {
    pub find: Ident,
    pub replace: Type,
}

pub struct RemoveGenerics {
    pub find: Ident,
}

impl VisitMut for FindReplacePathSegment {
    fn visit_path_segment_mut(&mut self, node: &mut PathSegment) {
        if node.ident == self.find {
            node.ident = self.replace.clone();
        }

        visit_mut::visit_path_segment_mut(self, node);
    }
}

impl VisitMut for FindReplaceType {
    fn visit_type_mut(&mut self, node: &mut Type) {
        let found = match node {
            Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident(&self.find),
            _ => false,
        };

        if found {
            *node = self.replace.clone();
        } else {
            visit_mut::visit_type_mut(self, node);
        }
    }
}

impl VisitMut for RemoveGenerics {
    fn visit_generics_mut(&mut self, node: &mut Generics) {
        node.params = Punctuated::from_iter(node.params.iter().filter(|x| {
            if let GenericParam::Type(type_param) = &x {
                return type_param.ident != self.find;
            }

            true
        }).cloned());

        visit_mut::visit_generics_mut(self, node);
    }
}
