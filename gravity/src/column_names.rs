//! This module stores the column names of every input contract and of the
//! published output table. The input names are a fixed, documented contract
//! with the upstream files and must not be auto-discovered.

// Flow file (bilateral migration flow estimates, comma separated)
pub const FLOW_ORIGIN: &str = "origin";
pub const FLOW_DEST: &str = "destination";
pub const FLOW_ORIGIN_ISO: &str = "origIso";
pub const FLOW_DEST_ISO: &str = "destIso";
pub const FLOW_PERIOD: &str = "year";
pub const FLOW_COUNT: &str = "migrantCount";

// CEPII GeoDist dyadic file (one row per ordered country pair)
pub const DYADIC_ISO_ORIGIN: &str = "iso_o";
pub const DYADIC_ISO_DEST: &str = "iso_d";
pub const DYADIC_DISTANCE: &str = "distcap";
pub const DYADIC_CONTIGUOUS: &str = "contig";
pub const DYADIC_COMMON_LANGUAGE: &str = "comlang_off";
pub const DYADIC_COLONIAL_LINK: &str = "colony";

// CEPII GeoDist country file (one row per country)
pub const COUNTRY_ISO: &str = "iso3";
pub const COUNTRY_AREA: &str = "area";
pub const COUNTRY_LANDLOCKED: &str = "landlocked";

// UN Data long-format files (one row per country, year and series)
pub const UN_COUNTRY_CODE: &str = "Region/Country/Area";
pub const UN_PERIOD: &str = "Year";
pub const UN_SERIES: &str = "Series";
pub const UN_VALUE: &str = "Value";

// The five recognized UN series. The under-five mortality rate is used as an
// infant-mortality proxy.
pub const SERIES_POPULATION: &str = "Population mid-year estimates (millions)";
pub const SERIES_AGE_0_14: &str = "Population aged 0 to 14 years old (percentage)";
pub const SERIES_AGE_60_PLUS: &str = "Population aged 60+ years old (percentage)";
pub const SERIES_UNDER5_MORTALITY: &str =
    "Under five mortality rate for both sexes (per 1,000 live births)";
pub const SERIES_URBAN: &str = "Urban population (percent)";

// Canonical country-year columns after the long-to-wide reshape
pub const COUNTRY_CODE: &str = "country_code";
pub const PERIOD: &str = "period";
pub const POPULATION: &str = "population";
pub const AGE_0_14_PCT: &str = "age_0_14_pct";
pub const AGE_60_PLUS_PCT: &str = "age_60_plus_pct";
pub const UNDER5_MORTALITY_RATE: &str = "under5_mortality_rate";
pub const URBAN_PCT: &str = "urban_pct";

// Column suffixes for the origin and destination sides of a join
pub const ORIGIN_SUFFIX: &str = "_i";
pub const DEST_SUFFIX: &str = "_j";

// Derived demographic variables
pub const WORKING_AGE_PCT: &str = "working_age_pct";
pub const PSR: &str = "PSR";

// Suffixed working columns produced by the merge stage
pub const UNDER5_MORTALITY_RATE_I: &str = "under5_mortality_rate_i";
pub const UNDER5_MORTALITY_RATE_J: &str = "under5_mortality_rate_j";
pub const URBAN_PCT_I: &str = "urban_pct_i";
pub const URBAN_PCT_J: &str = "urban_pct_j";

// Published output columns
pub const OUT_ORIGIN: &str = "origin";
pub const OUT_DEST: &str = "dest";
pub const OUT_PERIOD: &str = "period";
pub const OUT_FLOW: &str = "flow";
pub const OUT_POPULATION_I: &str = "population_i";
pub const OUT_POPULATION_J: &str = "population_j";
pub const OUT_DISTANCE: &str = "distance";
pub const OUT_PSR_I: &str = "PSR_i";
pub const OUT_PSR_J: &str = "PSR_j";
pub const OUT_MORTALITY_I: &str = "mortality_i";
pub const OUT_MORTALITY_J: &str = "mortality_j";
pub const OUT_URBAN_I: &str = "urban_i";
pub const OUT_URBAN_J: &str = "urban_j";
pub const OUT_AREA_I: &str = "area_i";
pub const OUT_AREA_J: &str = "area_j";
pub const OUT_LANDLOCKED_I: &str = "landlocked_i";
pub const OUT_LANDLOCKED_J: &str = "landlocked_j";
pub const OUT_CONTIGUOUS: &str = "contiguous";
pub const OUT_COMMON_LANGUAGE: &str = "common_language";
pub const OUT_COLONIAL_LINK: &str = "colonial_link";

/// The published column order of the output table. Columns absent from the
/// merged table are silently omitted by the output assembler.
pub const OUTPUT_COLUMNS: [&str; 20] = [
    OUT_ORIGIN,
    OUT_DEST,
    OUT_PERIOD,
    OUT_FLOW,
    OUT_POPULATION_I,
    OUT_POPULATION_J,
    OUT_DISTANCE,
    OUT_PSR_I,
    OUT_PSR_J,
    OUT_MORTALITY_I,
    OUT_MORTALITY_J,
    OUT_URBAN_I,
    OUT_URBAN_J,
    OUT_AREA_I,
    OUT_AREA_J,
    OUT_LANDLOCKED_I,
    OUT_LANDLOCKED_J,
    OUT_CONTIGUOUS,
    OUT_COMMON_LANGUAGE,
    OUT_COLONIAL_LINK,
];
