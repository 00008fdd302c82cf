use crate::models::common::Location;

/// An order being drafted by a customer: which cylinder and where to deliver it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    /// Order id.
    pub id: String,
    /// Cylinder size label, e.g. "13KG".
    pub cylinder_size: String,
    /// Delivery location.
    pub location: Location,
}
