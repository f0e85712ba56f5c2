//! Listing summary card used on the flats index and booking page.

use leptos::prelude::*;

use crate::net::types::Flat;

#[component]
pub fn FlatCard(
    flat: Flat,
    /// Wrap the card in a link to the booking page.
    #[prop(optional)]
    link: bool,
) -> impl IntoView {
    let href = format!("/booking/{}", flat.id);
    let body = view! {
        <img class="flat-card__image" src=flat.image.clone() alt=flat.title.clone()/>
        <div class="flat-card__body">
            <h3 class="flat-card__title">{flat.title.clone()}</h3>
            <p class="flat-card__location">{flat.location.clone()}</p>
            <p class="flat-card__facts">
                {format!("{} bedrooms · {} sq ft", flat.total_bedrooms, flat.square_feet)}
            </p>
            <p class="flat-card__rent">{format!("Rent: {}", flat.rent)}</p>
        </div>
    };

    if link {
        view! { <a class="flat-card flat-card--link" href=href>{body}</a> }.into_any()
    } else {
        view! { <div class="flat-card">{body}</div> }.into_any()
    }
}
