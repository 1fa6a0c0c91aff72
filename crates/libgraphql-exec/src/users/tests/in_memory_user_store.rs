use crate::users::InMemoryUserStore;
use crate::users::User;
use crate::users::UserStore;
use crate::users::UserStoreError;
use crate::Value;
use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeZone;
use chrono::Utc;

type Result<T> = std::result::Result<T, UserStoreError>;

// 2018-06-20T00:00:00Z
const JUNE_20_2018_UTC_MILLIS: i64 = 1_529_452_800_000;

#[tokio::test]
async fn seed_data() -> Result<()> {
    let users = InMemoryUserStore::seeded().list_users().await?;

    let june_20 =
        Local.with_ymd_and_hms(2018, 6, 20, 0, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0], User::new(1, "J.K. Rowling").with_date(june_20));
    assert_eq!(users[1].name, "Michael Crichton");

    // Midnight on a local clock sits exactly one UTC offset away from UTC
    // midnight of the same calendar day.
    let rowling_date = users[0].date.unwrap();
    let offset_millis =
        i64::from(
            Local.offset_from_utc_datetime(&rowling_date.naive_utc()).local_minus_utc()
        ) * 1000;
    assert_eq!(rowling_date.timestamp_millis(), JUNE_20_2018_UTC_MILLIS - offset_millis);
    assert_eq!(
        rowling_date.with_timezone(&Local).naive_local(),
        NaiveDate::from_ymd_opt(2018, 6, 20).unwrap().and_hms_opt(0, 0, 0).unwrap(),
    );
    assert_eq!(
        users[1].date.map(|date| date - june_20),
        Some(chrono::Duration::days(1)),
    );

    Ok(())
}

#[tokio::test]
async fn add_user_reproduces_reference_behavior() -> Result<()> {
    let store = InMemoryUserStore::seeded();

    let added = store.add_user("Ada").await?;
    assert_eq!(added, User::new(2, "Ada"));

    // Not appended.
    assert_eq!(store.list_users().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn pushed_users_are_listed() -> Result<()> {
    let store = InMemoryUserStore::new(vec![]);
    store.push(User::new(7, "Grace"))?;

    assert_eq!(store.list_users().await?, vec![User::new(7, "Grace")]);

    Ok(())
}

#[test]
fn user_without_date_omits_the_property() {
    let value = Value::from(User::new(2, "Ada"));
    assert_eq!(value, Value::object([
        ("id", Value::Int(2)),
        ("name", Value::from("Ada")),
    ]));
    assert!(value.get("date").is_none());
}
