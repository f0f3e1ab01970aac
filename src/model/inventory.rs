crate::resource! {
    /// A set of hosts and groups jobs run against.
    pub struct Inventory {
        endpoint: "inventories",
        exclude: ["variables"],
    }
}
