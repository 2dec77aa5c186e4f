//! ProductDetails - bullet list of product facts.

use super::types::PropValue;

/// Props for [`ProductDetails`].
#[derive(Clone, Debug, Default)]
pub struct ProductDetailsProps {
    pub details: PropValue<Vec<String>>,
}

/// Stateless list of detail strings.
#[derive(Clone, Debug)]
pub struct ProductDetails {
    props: ProductDetailsProps,
}

impl ProductDetails {
    pub fn new(props: ProductDetailsProps) -> Self {
        Self { props }
    }

    /// Detail lines in fixture order.
    pub fn details(&self) -> Vec<String> {
        self.props.details.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_pass_through() {
        let details = ProductDetails::new(ProductDetailsProps {
            details: vec!["80% cotton".to_string(), "20% polyester".to_string()].into(),
        });
        assert_eq!(details.details(), vec!["80% cotton", "20% polyester"]);
    }
}
