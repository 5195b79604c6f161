use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

enum Segment {
    Literal(String),
    /// A `&'static str` macro call such as `module_path!()`.
    Macro(TokenStream),
    /// A `&str` expression evaluated in the generated code.
    Runtime(TokenStream),
}

impl ToTokens for Segment {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Literal(text) => text.to_tokens(tokens),
            Self::Macro(expr) | Self::Runtime(expr) => expr.to_tokens(tokens),
        }
    }
}

/// A generated type name, assembled piece by piece.
///
/// Adjacent literal pieces are merged while the macro runs, so a non-generic
/// path like `demo::Point` comes out as a single string literal.
pub(crate) struct StringExpr(Vec<Segment>);

impl StringExpr {
    pub fn literal(text: &str) -> Self {
        Self(vec![Segment::Literal(text.to_owned())])
    }

    pub fn from_macro(call: TokenStream) -> Self {
        Self(vec![Segment::Macro(call)])
    }

    pub fn push_str(&mut self, text: &str) -> &mut Self {
        if let Some(Segment::Literal(last)) = self.0.last_mut() {
            last.push_str(text);
        } else {
            self.0.push(Segment::Literal(text.to_owned()));
        }
        self
    }

    pub fn push_runtime(&mut self, expr: TokenStream) -> &mut Self {
        self.0.push(Segment::Runtime(expr));
        self
    }

    pub fn append(&mut self, other: StringExpr) -> &mut Self {
        for segment in other.0 {
            match segment {
                Segment::Literal(text) => {
                    self.push_str(&text);
                }
                segment => self.0.push(segment),
            }
        }
        self
    }

    /// Tokens of type `&'static str`.
    ///
    /// Only valid without runtime pieces, that is for non-generic types.
    pub fn static_str(&self) -> TokenStream {
        match self.0.as_slice() {
            [single] => single.to_token_stream(),
            segments => quote! { ::core::concat!( #(#segments),* ) },
        }
    }

    /// Tokens of type `String`, joined by the runtime `__concat` helper.
    pub fn owned_string(&self, si_reflect_path: &syn::Path) -> TokenStream {
        let macro_utils_ = crate::path::macro_utils_(si_reflect_path);
        let segments = &self.0;
        quote! { #macro_utils_::__concat(&[ #(#segments),* ]) }
    }
}
