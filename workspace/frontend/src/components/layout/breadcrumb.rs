use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Clone, PartialEq)]
struct BreadcrumbItem {
    label: &'static str,
    route: Route,
}

const HOME: BreadcrumbItem = BreadcrumbItem { label: "Home", route: Route::Home };

fn items_for(route: Option<Route>) -> Vec<BreadcrumbItem> {
    match route {
        None | Some(Route::Home) => vec![HOME],
        Some(Route::Charts) => vec![HOME, BreadcrumbItem { label: "Charts", route: Route::Charts }],
        Some(Route::Predictions) => vec![HOME, BreadcrumbItem { label: "Predictions", route: Route::Predictions }],
        Some(Route::Settings) => vec![HOME, BreadcrumbItem { label: "Settings", route: Route::Settings }],
        Some(Route::NotFound) => vec![HOME, BreadcrumbItem { label: "404", route: Route::NotFound }],
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let location = use_location();
    let breadcrumb_items = items_for(location.as_ref().and_then(|loc| Route::recognize(loc.path())));

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for breadcrumb_items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == breadcrumb_items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{item.label}</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    {item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_sit_under_home() {
        let labels: Vec<_> = items_for(Some(Route::Predictions)).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "Predictions"]);
        assert_eq!(items_for(None).len(), 1);
    }
}
