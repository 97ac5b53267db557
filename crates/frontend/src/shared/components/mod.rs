pub mod popup_notification;
