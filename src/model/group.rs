crate::resource! {
    /// A named set of hosts; groups nest through their children.
    pub struct Group {
        endpoint: "groups",
        exclude: ["variables"],
    }
}
