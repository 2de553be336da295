// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bills_json_datasource;
        pub(crate) mod expenses_csv_datasource;
        pub(crate) mod worksheet_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod bill_model;
        pub(crate) mod worksheet_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bill;
        pub(crate) mod body_data;
        pub(crate) mod expense;
        pub(crate) mod extraction;
        pub(crate) mod layout;
        pub(crate) mod month;
        pub(crate) mod report;
        pub(crate) mod table;
        pub(crate) mod worksheet;
    }
    pub(crate) mod logic {
        pub(crate) mod bill_impl;
        pub(crate) mod body_builder;
        pub(crate) mod credit_card_extractor;
        pub(crate) mod details_parser;
        pub(crate) mod details_table_extractor;
        pub(crate) mod expense_impl;
        pub(crate) mod group_table_extractor;
        pub(crate) mod month_utils;
        pub(crate) mod report_renderer;
        pub(crate) mod report_table_extractor;
        pub(crate) mod text;
        pub(crate) mod title_parser;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod extract_usecase;
        pub(crate) mod import_usecase;
        pub(crate) mod render_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_printer;
    pub(crate) mod table_writer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bill::*;
        pub use crate::domain::entities::body_data::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::extraction::*;
        pub use crate::domain::entities::layout::*;
        pub use crate::domain::entities::month::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::table::*;
        pub use crate::domain::entities::worksheet::*;
        pub use crate::domain::logic::month_utils::HasMonthCycle;
    }

    pub mod sheets {
        pub use crate::domain::logic::credit_card_extractor::generate_credit_card_table;
        pub use crate::domain::logic::details_parser::{parse_to_details_table, parse_worksheet};
        pub use crate::domain::logic::details_table_extractor::generate_details_table;
        pub use crate::domain::logic::group_table_extractor::{
            accumulate_group_tables, build_detail_data, build_group_table,
        };
        pub use crate::domain::logic::month_utils::{split_months_by_instalment, total_by_month};
        pub use crate::domain::logic::report_renderer::spreadsheet_processing;
        pub use crate::domain::logic::report_table_extractor::{
            parse_detail_tables, parse_summary_table,
        };
        pub use crate::domain::logic::title_parser::get_work_sheet_title;
    }
}
