use serde::Deserialize;

use crate::rides::repository::ride_repository::Pagination;

#[derive(Debug, Default, Deserialize)]
pub struct ListRidesDto {
  pub page: Option<String>,
  pub limit: Option<String>,
}

impl ListRidesDto {
  /// `None` means the whole table is listed. That happens when `page` is
  /// absent, non-numeric, or below 1.
  pub fn pagination(&self, default_limit: i64) -> Option<Pagination> {
    let page = positive_integer(self.page.as_deref())?;
    let limit = positive_integer(self.limit.as_deref()).unwrap_or(default_limit);
    Some(Pagination {
      limit,
      offset: (page - 1).saturating_mul(limit),
    })
  }
}

fn positive_integer(value: Option<&str>) -> Option<i64> {
  value
    .and_then(|value| value.trim().parse::<i64>().ok())
    .filter(|value| *value >= 1)
}
