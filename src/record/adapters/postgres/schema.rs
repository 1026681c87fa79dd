//! Diesel schema for maintenance record persistence.

diesel::table! {
    /// Equipment maintenance records.
    maintenance_records (id) {
        /// Store-assigned record identifier.
        id -> Int4,
        /// Equipment the maintenance applies to.
        #[max_length = 100]
        equipment -> Varchar,
        /// User who requested the maintenance.
        #[max_length = 100]
        user -> Varchar,
        /// Technician who performed the work.
        #[max_length = 100]
        technician -> Varchar,
        /// Maintenance event date.
        date -> Timestamptz,
        /// Ordered task descriptions as a JSON array.
        tasks -> Jsonb,
        /// Lifecycle status label.
        #[max_length = 50]
        status -> Varchar,
        /// Optional free-form notes.
        notes -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
