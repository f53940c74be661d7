//! Business entity kinds used for code prefixes.

use serde::{Deserialize, Serialize};

/// The kind of business entity a generated code identifies.
///
/// # Example
///
/// ```
/// use logistics_toolkit::models::EntityKind;
///
/// assert_eq!(EntityKind::parse("pedido"), EntityKind::Order);
/// assert_eq!(EntityKind::Order.prefix(), "PED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A customer account.
    Customer,
    /// A customer order.
    Order,
    /// A supplier.
    Supplier,
    /// An invoice.
    Invoice,
    /// A system user.
    User,
    /// A catalogue product.
    Product,
    /// Anything else.
    Generic,
}

impl EntityKind {
    /// Parses an entity type name, case-insensitively.
    ///
    /// Both the back-office names (`CLIENTE`, `PEDIDO`, ...) and their English
    /// equivalents are accepted. Unknown names map to [`EntityKind::Generic`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "CLIENTE" | "CUSTOMER" => Self::Customer,
            "PEDIDO" | "ORDER" => Self::Order,
            "PROVEEDOR" | "SUPPLIER" => Self::Supplier,
            "FACTURA" | "INVOICE" => Self::Invoice,
            "USUARIO" | "USER" => Self::User,
            "PRODUCTO" | "PRODUCT" => Self::Product,
            _ => Self::Generic,
        }
    }

    /// Returns the code prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Customer => "CLI",
            Self::Order => "PED",
            Self::Supplier => "PROV",
            Self::Invoice => "FACT",
            Self::User => "USR",
            Self::Product => "PROD",
            Self::Generic => "GEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_back_office_names() {
        assert_eq!(EntityKind::parse("CLIENTE"), EntityKind::Customer);
        assert_eq!(EntityKind::parse("PEDIDO"), EntityKind::Order);
        assert_eq!(EntityKind::parse("PROVEEDOR"), EntityKind::Supplier);
        assert_eq!(EntityKind::parse("FACTURA"), EntityKind::Invoice);
        assert_eq!(EntityKind::parse("USUARIO"), EntityKind::User);
        assert_eq!(EntityKind::parse("PRODUCTO"), EntityKind::Product);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EntityKind::parse("factura"), EntityKind::Invoice);
        assert_eq!(EntityKind::parse("Invoice"), EntityKind::Invoice);
    }

    #[test]
    fn test_unknown_name_is_generic() {
        assert_eq!(EntityKind::parse("VEHICULO"), EntityKind::Generic);
        assert_eq!(EntityKind::Generic.prefix(), "GEN");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(EntityKind::Customer.prefix(), "CLI");
        assert_eq!(EntityKind::Supplier.prefix(), "PROV");
        assert_eq!(EntityKind::Invoice.prefix(), "FACT");
        assert_eq!(EntityKind::User.prefix(), "USR");
        assert_eq!(EntityKind::Product.prefix(), "PROD");
    }
}
