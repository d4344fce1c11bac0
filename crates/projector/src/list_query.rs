//! Построение запросов к спискам документов и состояние списка.
//!
//! Номер страницы на входе начинается с 1, смещение в запросе с 0.
//! Перевод выполняется только в [`build_list_query`].

use contracts::shared::list_query::{FilterCondition, ListQuery, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListQueryError {
    #[error("page numbers start at 1")]
    PageZero,

    #[error("page {page} is past the last page {last_page}")]
    PastLastPage { page: usize, last_page: usize },

    #[error("page {page} with page size {page_size} is out of range")]
    PageOutOfRange { page: usize, page_size: usize },

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("sort column must not be empty")]
    EmptySortColumn,
}

/// Количество страниц; пустой список занимает ноль страниц
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// Привести страницу к диапазону `1..=max(total_pages, 1)`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn build_list_query(
    filters: &[FilterCondition],
    page: usize,
    page_size: usize,
    sort_column: &str,
    sort_direction: SortDirection,
) -> Result<ListQuery, ListQueryError> {
    if page == 0 {
        return Err(ListQueryError::PageZero);
    }
    if page_size == 0 {
        return Err(ListQueryError::ZeroPageSize);
    }
    let sort_column = sort_column.trim();
    if sort_column.is_empty() {
        return Err(ListQueryError::EmptySortColumn);
    }

    let offset = (page - 1)
        .checked_mul(page_size)
        .ok_or(ListQueryError::PageOutOfRange { page, page_size })?;

    Ok(ListQuery {
        offset,
        limit: page_size,
        order_by: format!("{} {}", sort_column, sort_direction.as_str()),
        filters: filters.to_vec(),
    })
}

/// То же, что [`build_list_query`], но страница проверяется по известному
/// общему количеству записей
pub fn build_list_query_within(
    filters: &[FilterCondition],
    page: usize,
    page_size: usize,
    sort_column: &str,
    sort_direction: SortDirection,
    total_records: usize,
) -> Result<ListQuery, ListQueryError> {
    let query = build_list_query(filters, page, page_size, sort_column, sort_direction)?;
    let last_page = total_pages(total_records, page_size).max(1);
    if page > last_page {
        return Err(ListQueryError::PastLastPage { page, last_page });
    }
    Ok(query)
}

/// Состояние одного списка: фильтры, сортировка, пагинация
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    // filters
    pub filters: Vec<FilterCondition>,

    // server sorting
    pub sort_field: String,
    pub sort_direction: SortDirection,

    // pagination (page is 1-based)
    pub page: usize,
    pub page_size: usize,
    /// `None`, пока количество записей не загружено
    pub total_count: Option<usize>,
}

impl ListState {
    pub fn new(sort_field: impl Into<String>, page_size: usize) -> Self {
        Self {
            filters: Vec::new(),
            sort_field: sort_field.into(),
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size,
            total_count: None,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count.unwrap_or_default(), self.page_size)
    }

    /// Повторный клик по той же колонке меняет направление,
    /// новая колонка сортируется по возрастанию
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_field == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = column.to_string();
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    /// Перейти на страницу; недопустимая страница отклоняется без изменения состояния
    pub fn go_to_page(&mut self, page: usize) -> Result<(), ListQueryError> {
        if page == 0 {
            return Err(ListQueryError::PageZero);
        }
        if self.total_count.is_some() {
            let last_page = self.total_pages().max(1);
            if page > last_page {
                return Err(ListQueryError::PastLastPage { page, last_page });
            }
        }
        self.page = page;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ListQueryError> {
        if page_size == 0 {
            return Err(ListQueryError::ZeroPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        Ok(())
    }

    /// Запомнить количество записей; текущая страница сдвигается внутрь диапазона
    pub fn set_total(&mut self, total_count: usize) {
        self.total_count = Some(total_count);
        let clamped = clamp_page(self.page, self.total_pages());
        if clamped != self.page {
            tracing::debug!("Page {} is out of range, moving to {}", self.page, clamped);
            self.page = clamped;
        }
    }

    pub fn set_filters(&mut self, filters: Vec<FilterCondition>) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn refresh(&mut self) {
        self.page = 1;
    }

    /// Запрос для текущей страницы
    pub fn query(&self) -> Result<ListQuery, ListQueryError> {
        match self.total_count {
            Some(total) => build_list_query_within(
                &self.filters,
                self.page,
                self.page_size,
                &self.sort_field,
                self.sort_direction,
                total,
            ),
            None => build_list_query(
                &self.filters,
                self.page,
                self.page_size,
                &self.sort_field,
                self.sort_direction,
            ),
        }
    }

    /// "стр / всего (записей)"
    pub fn page_info(&self) -> String {
        format!(
            "{} / {} ({})",
            self.page,
            self.total_pages().max(1),
            self.total_count.unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_page_descending() {
        let query = build_list_query(&[], 3, 10, "name", SortDirection::Desc).unwrap();
        assert_eq!(query.offset, 20);
        assert_eq!(query.limit, 10);
        assert_eq!(query.order_by, "name desc");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_filters_pass_through_unchanged() {
        let filters = vec![
            FilterCondition::equals("custom_district", "North"),
            FilterCondition::new("status", "!=", "Cancelled"),
        ];
        let query = build_list_query(&filters, 1, 20, "modified", SortDirection::Asc).unwrap();
        assert_eq!(query.offset, 0);
        assert_eq!(query.filters, filters);
    }

    #[test]
    fn test_invalid_pages_rejected() {
        assert_eq!(
            build_list_query(&[], 0, 10, "name", SortDirection::Asc),
            Err(ListQueryError::PageZero)
        );
        assert_eq!(
            build_list_query(&[], 1, 0, "name", SortDirection::Asc),
            Err(ListQueryError::ZeroPageSize)
        );
        assert_eq!(
            build_list_query(&[], 1, 10, "  ", SortDirection::Asc),
            Err(ListQueryError::EmptySortColumn)
        );
        assert_eq!(
            build_list_query_within(&[], 4, 10, "name", SortDirection::Asc, 30),
            Err(ListQueryError::PastLastPage { page: 4, last_page: 3 })
        );
        assert!(build_list_query_within(&[], 3, 10, "name", SortDirection::Asc, 30).is_ok());
        // пустой список: допустима только первая страница
        assert!(build_list_query_within(&[], 1, 10, "name", SortDirection::Asc, 0).is_ok());
        assert!(build_list_query_within(&[], 2, 10, "name", SortDirection::Asc, 0).is_err());
    }

    #[test]
    fn test_huge_page_is_out_of_range() {
        assert_eq!(
            build_list_query(&[], usize::MAX / 2, 10, "name", SortDirection::Asc),
            Err(ListQueryError::PageOutOfRange {
                page: usize::MAX / 2,
                page_size: 10,
            })
        );

        let mut state = ListState::new("name", 10);
        state.go_to_page(usize::MAX).unwrap();
        assert!(matches!(
            state.query(),
            Err(ListQueryError::PageOutOfRange { .. })
        ));

        // последняя допустимая страница при page_size = 1
        assert_eq!(
            build_list_query(&[], usize::MAX, 1, "name", SortDirection::Asc)
                .unwrap()
                .offset,
            usize::MAX - 1
        );
    }

    #[test]
    fn test_page_math() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ListState::new("name", 10);
        state.page = 2;
        state.toggle_sort("name");
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.page, 1);

        state.toggle_sort("name");
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.toggle_sort("name");
        state.toggle_sort("transaction_date");
        assert_eq!(state.sort_field, "transaction_date");
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_go_to_page_rejected_locally() {
        let mut state = ListState::new("name", 10);
        state.set_total(25);
        assert!(state.go_to_page(3).is_ok());
        assert_eq!(
            state.go_to_page(4),
            Err(ListQueryError::PastLastPage { page: 4, last_page: 3 })
        );
        assert_eq!(state.go_to_page(0), Err(ListQueryError::PageZero));
        assert_eq!(state.page, 3);
        assert_eq!(state.query().unwrap().offset, 20);
        assert_eq!(state.page_info(), "3 / 3 (25)");
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut state = ListState::new("name", 10);
        state.set_total(100);
        state.go_to_page(10).unwrap();
        state.set_total(15);
        assert_eq!(state.page, 2);
        assert!(state.query().is_ok());
    }

    #[test]
    fn test_page_size_and_filters_reset_page() {
        let mut state = ListState::new("name", 10);
        state.set_total(100);
        state.go_to_page(5).unwrap();
        state.set_page_size(50).unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.set_page_size(0), Err(ListQueryError::ZeroPageSize));

        state.go_to_page(2).unwrap();
        state.set_filters(vec![FilterCondition::equals("status", "Draft")]);
        assert_eq!(state.page, 1);
        assert_eq!(state.query().unwrap().filters.len(), 1);

        state.go_to_page(2).unwrap();
        state.refresh();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_unknown_total_allows_any_page() {
        let mut state = ListState::new("name", 20);
        assert!(state.go_to_page(7).is_ok());
        assert_eq!(state.query().unwrap().offset, 120);
    }

    #[test]
    fn test_query_windows_local_list() {
        let rows: Vec<u32> = (1..=25).collect();
        let query = build_list_query(&[], 3, 10, "name", SortDirection::Asc).unwrap();
        assert_eq!(query.window(&rows), &[21, 22, 23, 24, 25]);
    }
}
