/// Column-name constants for the fishery-metrics catch schema.
/// Single source of truth for the DataFrame boundary.

// ── Catch columns ───────────────────────────────────────────────────────────
pub mod catch {
    pub const SPECIES_NAME: &str = "species_name";
    pub const CATCH_KG: &str = "catch_kg";

    pub const REQUIRED: [&str; 2] = [SPECIES_NAME, CATCH_KG];
}
