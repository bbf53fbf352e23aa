//! Notifications command

use teamgrade::config::ClientConfig;
use teamgrade::output::{Listing, OperationResult, OutputMode};
use teamgrade::services::notification;

use super::context;

/// List the connected user's notifications, or toggle one
pub async fn notifications(check: Option<i64>, output_mode: OutputMode) -> anyhow::Result<()> {
    let api = context::connect(&ClientConfig::load())?;

    if let Some(id) = check {
        notification::change_state_checked(&api, id).await?;
        OperationResult::ok(format!("Notification {id} toggled")).render(output_mode);
        return Ok(());
    }

    let Some(user_id) = api.session().user_id() else {
        anyhow::bail!("Not logged in. Run 'teamgrade login' first");
    };
    let notifications = notification::get_all_notifications_from_user(&api, user_id).await?;

    let mut listing = Listing::new("Notifications");
    for item in notifications {
        let state = if item.checked == Some(true) { "read" } else { "unread" };
        listing.push(
            item.id,
            item.message.unwrap_or_default(),
            Some(format!("{state} from {}", item.user_from.name)),
        );
    }
    listing.render(output_mode);
    Ok(())
}
