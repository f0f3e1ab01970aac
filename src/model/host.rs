crate::resource! {
    /// A machine in an [`Inventory`](super::Inventory).
    pub struct Host {
        endpoint: "hosts",
        exclude: ["variables"],
    }
}
