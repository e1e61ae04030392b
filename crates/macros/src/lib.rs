// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Semana project*
//!
//! This crate contains the Semana procedural macros
//!

extern crate proc_macro;

use chrono::{Datelike, NaiveDate};
use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

// TODO: copied from `semana-core` (so are not synced)
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create a `Date`, using `date!("2000-01-31")`, with compile time checking
/// that the literal is a real calendar date.
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);

    let parsed = match NaiveDate::parse_from_str(&lit.value(), DATE_FORMAT) {
        Ok(parsed) => parsed,
        Err(error) => {
            return syn::Error::new_spanned(
                lit,
                format!("Expected a valid `YYYY-MM-DD` date literal ({error})"),
            )
            .to_compile_error()
            .into();
        }
    };

    let year = parsed.year();
    let month = parsed.month();
    let day = parsed.day();

    let ident = syn::Ident::new("Date", proc_macro2::Span::call_site());
    quote! {
        #ident::from_ymd(#year, #month, #day).unwrap()
    }
    .into()
}
