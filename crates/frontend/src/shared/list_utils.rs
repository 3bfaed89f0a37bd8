/// Утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Минимальная длина поискового запроса
pub const MIN_FILTER_LEN: usize = 2;

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().chars().count() < MIN_FILTER_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator span
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("beta", 2), Row("alpha", 3), Row("gamma", 1)]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0], Row("alpha", 3));
        sort_list(&mut items, "n", false);
        assert_eq!(items[0], Row("alpha", 3));
        assert_eq!(items[2], Row("gamma", 1));
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), "AL"), vec![Row("alpha", 3)]);
        // too short, nothing filtered
        assert_eq!(filter_list(rows(), "a").len(), 3);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert!(filter_list(rows(), "zz").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("role", "name", true), " ⇅");
        assert_eq!(
            get_sort_class("name", "name"),
            "table__sort-indicator table__sort-indicator--active"
        );
    }
}
