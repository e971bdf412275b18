//! Identity key inspection.

use clap::Args;

use crate::error::Result;
use crate::identity::{background_colour, hash_to_index, is_canonical_hex, normalize_identity};

/// Show how an identity key maps onto the palette
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Identity key to hash
    pub key: String,
}

pub fn run(args: HashArgs) -> Result<()> {
    println!("{}", describe(&args.key));
    Ok(())
}

fn describe(key: &str) -> String {
    let source = if is_canonical_hex(&key.to_lowercase()) {
        "canonical"
    } else {
        "md5"
    };
    format!(
        "{}\t{}\t{}\t{}",
        normalize_identity(key),
        source,
        hash_to_index(key),
        background_colour(key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_digested_key() {
        assert_eq!(
            describe("alice"),
            "6384e2b2184bcbf58eccf10ca7a6563c\tmd5\t16\t#795aab"
        );
    }

    #[test]
    fn test_describe_canonical_key() {
        assert!(describe("1234ABCD-5678-EF01-2345-6789ABCDEF01").contains("\tcanonical\t16\t"));
    }
}
