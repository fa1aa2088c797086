mod category_test;
mod helpers;
mod router_test;
mod signup_test;
mod token_test;
mod user_test;
