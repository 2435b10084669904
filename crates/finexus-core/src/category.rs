//! The five financial categories and their section configurations.

use std::fmt;
use std::str::FromStr;

use crate::error::FinexusError;
use crate::schema::{ColumnSchema, FieldSchema};
use crate::section::{AddConfig, SectionConfig};

/// One of the five financial record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Assets,
    Investments,
    Crypto,
    Wills,
    Tax,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 5] = [
        Category::Assets,
        Category::Investments,
        Category::Crypto,
        Category::Wills,
        Category::Tax,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Assets => "assets",
            Category::Investments => "investments",
            Category::Crypto => "crypto",
            Category::Wills => "wills",
            Category::Tax => "tax",
        }
    }

    /// Label on the dashboard tab.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Category::Assets => "Assets",
            Category::Investments => "Investments",
            Category::Crypto => "Crypto",
            Category::Wills => "Wills",
            Category::Tax => "Income Tax",
        }
    }

    /// Resource path used for both list and add.
    pub fn path(&self) -> &'static str {
        match self {
            Category::Assets => "/assets",
            Category::Investments => "/investments",
            Category::Crypto => "/crypto",
            Category::Wills => "/wills",
            Category::Tax => "/tax",
        }
    }

    pub fn section(&self) -> SectionConfig {
        let path = self.path();
        match self {
            Category::Assets => SectionConfig {
                title: "Assets",
                description: "Track physical and digital assets.",
                columns: vec![
                    ColumnSchema::generic("name", "Name"),
                    ColumnSchema::generic("category", "Category"),
                    ColumnSchema::monetary("value", "Value"),
                ],
                add: AddConfig {
                    list_path: path,
                    add_path: path,
                    cta: "Add Asset",
                    fields: vec![
                        FieldSchema::text("name", "Name", "MacBook Pro"),
                        FieldSchema::text("category", "Category", "physical | digital"),
                        FieldSchema::number("value", "Value", "1800"),
                        FieldSchema::text("notes", "Notes", "optional"),
                    ],
                },
            },
            Category::Investments => SectionConfig {
                title: "Investments",
                description: "Stocks, bonds, funds and real estate.",
                columns: vec![
                    ColumnSchema::generic("name", "Name"),
                    ColumnSchema::generic("kind", "Type"),
                    ColumnSchema::generic("institution", "Institution"),
                    ColumnSchema::monetary("value", "Value"),
                ],
                add: AddConfig {
                    list_path: path,
                    add_path: path,
                    cta: "Add Investment",
                    fields: vec![
                        FieldSchema::text("name", "Name/Ticker", "AAPL"),
                        FieldSchema::text(
                            "kind",
                            "Type",
                            "stock | bond | fund | real_estate | other",
                        ),
                        FieldSchema::text("institution", "Institution", "Broker"),
                        FieldSchema::number("value", "Value", "5000"),
                    ],
                },
            },
            Category::Crypto => SectionConfig {
                title: "Crypto",
                description: "Manage your crypto holdings.",
                columns: vec![
                    ColumnSchema::generic("symbol", "Symbol"),
                    ColumnSchema::generic("amount", "Amount"),
                    ColumnSchema::generic("exchange", "Exchange"),
                    ColumnSchema::monetary("value_usd", "Value (USD)"),
                ],
                add: AddConfig {
                    list_path: path,
                    add_path: path,
                    cta: "Add Crypto",
                    fields: vec![
                        FieldSchema::text("symbol", "Symbol", "BTC"),
                        FieldSchema::number("amount", "Amount", "0.5"),
                        FieldSchema::text("exchange", "Exchange/Wallet", "Coinbase"),
                        FieldSchema::number("value_usd", "Value (optional)", "15000"),
                    ],
                },
            },
            Category::Wills => SectionConfig {
                title: "Wills & Estate",
                description: "Store and track will documents and beneficiaries.",
                columns: vec![
                    ColumnSchema::generic("title", "Title"),
                    ColumnSchema::generic("executor_name", "Executor"),
                    ColumnSchema::generic("beneficiaries", "Beneficiaries"),
                    ColumnSchema::generic("file_url", "File URL"),
                ],
                add: AddConfig {
                    list_path: path,
                    add_path: path,
                    cta: "Add Will",
                    fields: vec![
                        FieldSchema::text("title", "Title", "Family Will"),
                        FieldSchema::text("executor_name", "Executor", "Full name"),
                        FieldSchema::text(
                            "beneficiaries",
                            "Beneficiaries (comma separated)",
                            "Alice, Bob",
                        ),
                        FieldSchema::text("file_url", "File URL", "https://..."),
                    ],
                },
            },
            Category::Tax => SectionConfig {
                title: "Income Tax",
                description: "Plan and track annual tax filings.",
                columns: vec![
                    ColumnSchema::generic("year", "Year"),
                    ColumnSchema::generic("status", "Status"),
                    ColumnSchema::generic("filed_on", "Filed On"),
                    ColumnSchema::generic("file_url", "File URL"),
                ],
                add: AddConfig {
                    list_path: path,
                    add_path: path,
                    cta: "Add Filing",
                    fields: vec![
                        FieldSchema::number("year", "Year", "2024"),
                        FieldSchema::text(
                            "status",
                            "Status",
                            "planned | in_progress | filed | refunded | due",
                        ),
                        FieldSchema::text("filed_on", "Filed On (YYYY-MM-DD)", "2025-04-15"),
                        FieldSchema::text("file_url", "File URL", "https://..."),
                    ],
                },
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = FinexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| FinexusError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::record::{total, CategoryRecord};

    #[test]
    fn slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
        assert_eq!("  CRYPTO ".parse::<Category>().unwrap(), Category::Crypto);
        assert!(matches!(
            "pensions".parse::<Category>(),
            Err(FinexusError::UnknownCategory(_))
        ));
    }

    #[test]
    fn list_and_add_share_the_category_path() {
        for category in Category::ALL {
            let section = category.section();
            assert_eq!(section.add.list_path, category.path());
            assert_eq!(section.add.add_path, category.path());
            assert_eq!(section.add.list_path, format!("/{}", category.slug()));
        }
    }

    #[test]
    fn monetary_columns() {
        let monetary = |c: Category| -> Vec<&'static str> {
            c.section()
                .columns
                .iter()
                .filter(|col| col.is_monetary())
                .map(|col| col.key)
                .collect()
        };
        assert_eq!(monetary(Category::Assets), vec!["value"]);
        assert_eq!(monetary(Category::Investments), vec!["value"]);
        assert_eq!(monetary(Category::Crypto), vec!["value_usd"]);
        assert!(monetary(Category::Wills).is_empty());
        assert!(monetary(Category::Tax).is_empty());
    }

    #[test]
    fn every_section_totals_value_then_value_usd() {
        for category in Category::ALL {
            assert_eq!(category.section().monetary_keys(), vec!["value", "value_usd"]);
        }
    }

    #[test]
    fn fallback_field_counts_in_every_section() {
        let records: Vec<CategoryRecord> = serde_json::from_value(serde_json::json!([
            {"name": "Gold", "value_usd": 20},
            {"symbol": "BTC", "value": 100}
        ]))
        .unwrap();
        for category in [Category::Assets, Category::Crypto] {
            let keys = category.section().monetary_keys();
            assert_eq!(total(&records, &keys), 120.0, "{category}");
        }
    }

    #[test]
    fn number_fields() {
        let numbers = |c: Category| -> Vec<&'static str> {
            c.section()
                .add
                .fields
                .iter()
                .filter(|f| f.kind == FieldKind::Number)
                .map(|f| f.name)
                .collect()
        };
        assert_eq!(numbers(Category::Assets), vec!["value"]);
        assert_eq!(numbers(Category::Investments), vec!["value"]);
        assert_eq!(numbers(Category::Crypto), vec!["amount", "value_usd"]);
        assert!(numbers(Category::Wills).is_empty());
        assert_eq!(numbers(Category::Tax), vec!["year"]);
    }

    #[test]
    fn titles_and_buttons() {
        let wills = Category::Wills.section();
        assert_eq!(wills.title, "Wills & Estate");
        assert_eq!(wills.add.cta, "Add Will");
        assert_eq!(Category::Tax.tab_label(), "Income Tax");
        assert_eq!(Category::Tax.section().add.cta, "Add Filing");
    }
}
