//! Snapshot tests for generated PHP model sources.
//!
//! These tests verify that rendered documents match expected output.
//! Run `cargo insta review` to update snapshots when making intentional
//! changes.

use entgen_codegen::{Generator, GeneratorConfig, PreviewFile};
use entgen_schema::{SchemaModel, SchemaSnapshot};

const BLOG: &str = r#"
{
    "tables": [
        {"name": "users", "columns": [
            {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"},
            {"name": "name", "type": "varchar(255)"},
            {"name": "email", "type": "varchar(255)", "key": "UNI"},
            {"name": "password", "type": "varchar(60)", "comment": "hidden"},
            {"name": "created_at", "type": "timestamp"},
            {"name": "updated_at", "type": "timestamp"}
        ]},
        {"name": "posts", "columns": [
            {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"},
            {"name": "user_id", "type": "int(10) unsigned", "key": "MUL"},
            {"name": "title", "type": "varchar(255)"},
            {"name": "published_at", "type": "datetime"},
            {"name": "created_at", "type": "timestamp"},
            {"name": "updated_at", "type": "timestamp"}
        ]},
        {"name": "roles", "columns": [
            {"name": "id", "type": "int(10) unsigned", "key": "PRI", "extra": "auto_increment"},
            {"name": "label", "type": "varchar(100)"}
        ]},
        {"name": "role_user", "columns": [
            {"name": "role_id", "type": "int(10) unsigned", "key": "PRI"},
            {"name": "user_id", "type": "int(10) unsigned", "key": "PRI"}
        ]}
    ],
    "foreign_keys": [
        {"table": "posts", "column": "user_id", "referenced_table": "users", "referenced_column": "id"},
        {"table": "role_user", "column": "role_id", "referenced_table": "roles", "referenced_column": "id"},
        {"table": "role_user", "column": "user_id", "referenced_table": "users", "referenced_column": "id"}
    ]
}
"#;

/// Generate all preview files for the blog fixture.
fn generate_files() -> Vec<PreviewFile> {
    let snapshot = SchemaSnapshot::from_str_with_filename(BLOG, "schema.json").unwrap();
    let schema = SchemaModel::build(&snapshot, "").unwrap();
    let config = GeneratorConfig::default();
    Generator::new(&schema, &config).preview().unwrap()
}

/// Get a specific file from the generated output.
fn get_file(files: &[PreviewFile], path: &str) -> String {
    files
        .iter()
        .find(|file| file.path == path)
        .unwrap_or_else(|| panic!("{} not generated", path))
        .content
        .clone()
}

#[test]
fn test_generated_file_set() {
    let files = generate_files();
    let paths: Vec<_> = files.iter().map(|file| file.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Base/User.php",
            "User.php",
            "Base/Post.php",
            "Post.php",
            "Base/Role.php",
            "Role.php",
        ]
    );
}

#[test]
fn test_user_base_model() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "Base/User.php"), @r###"
<?php

namespace App\Base;

/**
 * Class User
 *
 * @property string $name  [varchar(255)] 255 characters
 * @property string $email [varchar(255)] 255 characters
 * @property Role[] $roles
 * @property Post[] $posts
 */
class User extends \Illuminate\Database\Eloquent\Model
{
    protected $table = 'users';

    protected $fillable = array('name', 'email');

    protected $hidden = array('password');

    public function roles()
    {
        return $this->belongsToMany('Role', 'role_user', 'id', 'id');
    }

    public function posts()
    {
        return $this->hasMany('Post', 'user_id', 'id');
    }
}
"###);
}

#[test]
fn test_post_base_model() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "Base/Post.php"), @r###"
<?php

namespace App\Base;

/**
 * Class Post
 *
 * @property string $title        [varchar(255)] 255 characters
 * @property string $published_at [datetime]
 * @property User   $user
 */
class Post extends \Illuminate\Database\Eloquent\Model
{
    protected $table = 'posts';

    protected $fillable = array('title', 'published_at');

    public function getDates()
    {
        return array('published_at');
    }

    public function user()
    {
        return $this->belongsTo('User', 'user_id', 'id');
    }
}
"###);
}

#[test]
fn test_role_base_model() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "Base/Role.php"), @r###"
<?php

namespace App\Base;

/**
 * Class Role
 *
 * @property string $label [varchar(100)] 100 characters
 * @property User[] $users
 */
class Role extends \Illuminate\Database\Eloquent\Model
{
    protected $table = 'roles';

    protected $fillable = array('label');

    public function users()
    {
        return $this->belongsToMany('User', 'role_user', 'id', 'id');
    }
}
"###);
}

#[test]
fn test_user_extension_model() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "User.php"), @r###"
<?php

namespace App;

class User extends \App\Base\User
{
}
"###);
}

#[test]
fn test_generation_is_idempotent() {
    let first = generate_files();
    let second = generate_files();
    assert_eq!(first, second);
}

#[test]
fn test_primary_key_and_foreign_key_never_fillable() {
    let files = generate_files();
    let post = get_file(&files, "Base/Post.php");
    assert_eq!(
        post.lines()
            .find(|line| line.contains("$fillable"))
            .unwrap()
            .trim(),
        "protected $fillable = array('title', 'published_at');"
    );
}
