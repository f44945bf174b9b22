use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.8rem;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 4rem;
                    margin: 0;
                    color: hsl(217, 91%, 60%);
                }
                .not-found p { color: hsl(215, 16%, 60%); margin: 0; }
                .not-found a { color: hsl(189, 94%, 50%); }
            "#}</style>
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the presentation"}</Link<Route>>
        </div>
    }
}
