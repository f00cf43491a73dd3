//! XML persistence of the value store
//!
//! Layout of the file:
//!
//! ```xml
//! <config>
//!   <fields>
//!     <field>
//!       <parameter>
//!         <name>volume</name>
//!         <value>80</value>
//!         <default>50</default>
//!         <type>count</type>
//!       </parameter>
//!     </field>
//!   </fields>
//! </config>
//! ```
//!
//! `default` and `type` are written for people reading the file; loading
//! only uses `name` and `value` and parses the value with the registered
//! type. Reserved markup in values is escaped.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::ValueStore;

/// Name of the document root element
pub const ROOT_ELEMENT: &str = "config";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    fields: FieldList,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FieldList {
    #[serde(default)]
    field: Vec<FieldRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldRecord {
    parameter: StoredRecord,
}

/// One `<parameter>` record as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub default: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
}

/// Serialize every registered entry in registration order
///
/// Entries without a value yet are written with their default string.
pub fn encode(store: &ValueStore) -> Result<String> {
    let field = store
        .iter()
        .map(|(descriptor, value)| FieldRecord {
            parameter: StoredRecord {
                name: descriptor.name.clone(),
                value: value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| descriptor.default_value.clone()),
                default: descriptor.default_value.clone(),
                type_name: descriptor.entry_type.type_name().to_string(),
            },
        })
        .collect();
    let document = ConfigDocument {
        fields: FieldList { field },
    };

    let mut xml = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut xml, Some(ROOT_ELEMENT))?;
    serializer.indent(' ', 2);
    document.serialize(serializer)?;
    xml.push('\n');
    Ok(xml)
}

/// Parse a document into its records
///
/// Fails only on structural problems; the records themselves are not
/// checked against any registry.
pub fn decode(xml: &str) -> Result<Vec<StoredRecord>> {
    let document: ConfigDocument = quick_xml::de::from_str(xml)?;
    Ok(document
        .fields
        .field
        .into_iter()
        .map(|record| record.parameter)
        .collect())
}
