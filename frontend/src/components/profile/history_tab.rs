use yew::prelude::*;

use shared::ActivitySummaryDto;

#[derive(Properties, PartialEq)]
pub struct HistoryTabProps {
    #[prop_or_default]
    pub fleet_time: Vec<ActivitySummaryDto>,
    #[prop_or_default]
    pub totals: Vec<ActivitySummaryDto>,
}

/// Renders seconds of fleet time as "3d 4h", "2h 05m" or "45m".
pub fn format_fleet_time(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {:02}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes.max(0))
    }
}

fn activity_rows(entries: &[ActivitySummaryDto]) -> Html {
    entries
        .iter()
        .map(|entry| {
            let last_seen = entry
                .last_seen
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            html! {
                <tr key={entry.hull.id}>
                    <td class="py-1 pr-6">{&entry.hull.name}</td>
                    <td class="py-1 pr-6 font-mono">{format_fleet_time(entry.time_in_fleet)}</td>
                    <td class="py-1 text-gray-500">{last_seen}</td>
                </tr>
            }
        })
        .collect::<Html>()
}

/// Per-hull fleet activity for the profiled character, with account-wide
/// totals underneath.
#[function_component(HistoryTab)]
pub fn history_tab(props: &HistoryTabProps) -> Html {
    if props.fleet_time.is_empty() && props.totals.is_empty() {
        return html! { <p class="text-gray-500">{"No fleet activity recorded yet."}</p> };
    }

    html! {
        <div>
            <h2 class="text-xl font-semibold mb-3">{"Fleet history"}</h2>
            <table class="text-sm">
                <thead>
                    <tr class="text-left text-gray-500">
                        <th class="pr-6 font-medium">{"Hull"}</th>
                        <th class="pr-6 font-medium">{"Time in fleet"}</th>
                        <th class="font-medium">{"Last seen"}</th>
                    </tr>
                </thead>
                <tbody>{activity_rows(&props.fleet_time)}</tbody>
            </table>
            if !props.totals.is_empty() {
                <h3 class="text-lg font-semibold mt-6 mb-2">{"Account total"}</h3>
                <table class="text-sm">
                    <tbody>{activity_rows(&props.totals)}</tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_hours_days() {
        assert_eq!(format_fleet_time(0), "0m");
        assert_eq!(format_fleet_time(45 * 60), "45m");
        assert_eq!(format_fleet_time(2 * 3600 + 5 * 60), "2h 05m");
        assert_eq!(format_fleet_time(3 * 86_400 + 4 * 3600), "3d 4h");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_fleet_time(-30), "0m");
    }
}
