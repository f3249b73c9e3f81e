use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeeklyInsightsQuery {
    /// Any date of the wanted week (`YYYY-MM-DD`); defaults to the current week.
    pub week_start_date: Option<NaiveDate>,
}
