//! Integration tests for masking and slugs

use extkit::text::mask::{self, MaskOptions, SlugOptions};

#[test]
fn masks_contact_details() {
    let options = MaskOptions::default();
    assert_eq!(mask::mask_email("jane.smith@mail.org", &options), "j********h@m***.org");
    assert_eq!(mask::mask_phone_number("+1 (555) 010-9999", &options), "+* (***) ***-9999");
}

#[test]
fn formats_phone_digits() {
    let digits = mask::only_digits("555.867.5309");
    assert_eq!(mask::to_phone_number(&digits), "(555)-867-5309");
}

#[test]
fn slug_respects_length() {
    let options = SlugOptions::default();
    let slug = mask::seo_slug("F# and Rust: A Practical Comparison", 20, &options);
    assert_eq!(slug, "f-sharp-and-rust-a");
    assert!(slug.chars().count() <= 20);
}
