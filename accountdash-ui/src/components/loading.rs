//! Loading placeholders shown while a panel is `Panel::Loading`.

use leptos::*;

/// Placeholder rows in the activity log table
const SKELETON_ROWS: usize = 3;

/// Tailwind size classes, spelled out so the class scanner sees them
fn spinner_size_class(size: u8) -> &'static str {
    match size {
        0..=4 => "w-4 h-4",
        5..=6 => "w-6 h-6",
        _ => "w-8 h-8",
    }
}

/// Spinning ring, `size` in Tailwind units
#[component]
pub fn Spinner(#[prop(default = 8)] size: u8) -> impl IntoView {
    let class = format!(
        "inline-block {} rounded-full border-2 border-gray-600 border-t-primary-400 animate-spin",
        spinner_size_class(size)
    );
    view! { <span class=class role="status" /> }
}

/// Avatar circle and three detail lines, laid out like the profile card
#[component]
pub fn ProfileSkeleton() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-6 animate-pulse">
            <div class="w-24 h-24 rounded-full bg-gray-700" />
            <div class="space-y-3 flex-1">
                <div class="h-4 bg-gray-700 rounded w-40" />
                <div class="h-4 bg-gray-700 rounded w-56" />
                <div class="h-4 bg-gray-700 rounded w-32" />
            </div>
        </div>
    }
}

/// Grey table rows standing in for log entries
#[component]
pub fn LogRowsSkeleton(columns: usize) -> impl IntoView {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
                <tr class="border-t border-gray-700 animate-pulse">
                    {(0..columns)
                        .map(|_| view! {
                            <td class="py-3 pr-4"><div class="h-3 bg-gray-700 rounded" /></td>
                        })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_sizes_snap_to_known_classes() {
        assert_eq!(spinner_size_class(4), "w-4 h-4");
        assert_eq!(spinner_size_class(6), "w-6 h-6");
        assert_eq!(spinner_size_class(8), "w-8 h-8");
        assert_eq!(spinner_size_class(12), "w-8 h-8");
    }
}
